use extraction::FactCategory;

use super::{base_meta, claims, paragraphs, ContentDoc, Faq, HowToGuide, Step};
use crate::brief::Brief;
use crate::catalog;

/// Steps used when the catalog has no profile for the topic.
const GENERIC_STEPS: &[(&str, &str)] = &[
    ("Gather your gear", "Lay out everything you need before you start so you are not hunting for a tool halfway through the job."),
    ("Learn the basic motion", "Practice the core movement slowly at home or on the dock until it feels natural and repeatable."),
    ("Work through it step by step", "Follow the same order every time, checking each stage before moving on to the next one."),
    ("Check your result", "Inspect the finished work closely and test it gently, since a small mistake now can cost you a fish later."),
    ("Practice on the water", "Repeat the process under real fishing conditions, where wind, wet hands and moving boats add difficulty."),
];

pub fn generate_how_to(brief: &Brief) -> ContentDoc {
    let profile = catalog::how_to(&brief.slug);
    let task = brief
        .title
        .strip_prefix("How to ")
        .map(|t| t.to_lowercase())
        .unwrap_or_else(|| brief.primary_keyword.clone());

    let description = format!(
        "{}: a step-by-step guide with the gear you need, clear instructions and tips to avoid common mistakes.",
        brief.title
    );

    let intro = paragraphs([
        format!(
            "Knowing how to {} is one of those basic skills that pays off on every trip. Done right, it saves time, prevents lost fish and lets you focus on finding the bite instead of fighting your tackle.",
            task
        ),
        "The steps below are written for beginners but are worth a refresher for experienced anglers too. Read through them once, then practice at home before you need the skill on the water.".to_string(),
    ]);

    let steps = match profile {
        Some(p) => p.steps.to_vec(),
        None => GENERIC_STEPS.to_vec(),
    }
    .into_iter()
    .map(|(title, body)| Step {
        title: title.to_string(),
        body: body.to_string(),
    })
    .collect();

    let gear = match profile {
        Some(p) => p.gear.iter().map(|g| g.to_string()).collect(),
        None => vec![
            "Rod and reel matched to your target fish".to_string(),
            "Fresh fishing line".to_string(),
            "Line clippers or pliers".to_string(),
        ],
    };

    let mut tips = claims(brief, FactCategory::Technique, 3);
    tips.extend([
        "Take your time on the first few attempts; speed comes with repetition.".to_string(),
        "Moisten knots and check connections before every cast you care about.".to_string(),
    ]);

    let faqs = vec![
        Faq::new(
            format!("How long does it take to learn how to {}?", task),
            "Most anglers get the basics in a single practice session. Expect a few more outings before it feels automatic under real fishing conditions.",
        ),
        Faq::new(
            "What is the most common mistake?",
            "Rushing. Skipping a step or not checking the result is how most problems start, so slow down and follow the same order every time.",
        ),
        Faq::new(
            "Can I practice at home?",
            "Yes. Practicing in the yard or at the kitchen table builds muscle memory without the pressure of wind, waves and feeding fish.",
        ),
    ];

    ContentDoc::HowTo(HowToGuide {
        meta: base_meta(brief, &description),
        intro,
        difficulty: profile.map(|p| p.difficulty).unwrap_or("beginner").to_string(),
        gear,
        steps,
        tips,
        faqs,
    })
}
