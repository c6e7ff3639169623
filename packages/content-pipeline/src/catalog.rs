//! Built-in topic catalog.
//!
//! Seeds draw synthetic topic keys from here, the fixture fact source turns
//! profiles into research notes, and generators fall back to profile data
//! when a brief carries no matching facts.

use crate::page_type::PageType;

#[derive(Debug, Clone, Copy)]
pub struct SpeciesProfile {
    pub slug: &'static str,
    pub name: &'static str,
    pub scientific_name: &'static str,
    pub water: &'static str,
    pub habitat: &'static str,
    pub diet: &'static str,
    pub size: &'static str,
    pub best_season: &'static str,
    pub techniques: &'static [&'static str],
    pub regions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct LocationProfile {
    pub slug: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub water: &'static str,
    pub overview: &'static str,
    pub best_seasons: &'static str,
    /// Species slugs
    pub species: &'static [&'static str],
    pub access: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct HowToProfile {
    pub slug: &'static str,
    pub title: &'static str,
    pub difficulty: &'static str,
    pub gear: &'static [&'static str],
    pub steps: &'static [(&'static str, &'static str)],
}

/// Blog topic pattern: `{}` is replaced by a species slug.
#[derive(Debug, Clone, Copy)]
pub struct BlogTemplate {
    pub pattern: &'static str,
    pub category: &'static str,
}

pub const SPECIES: &[SpeciesProfile] = &[
    SpeciesProfile {
        slug: "redfish",
        name: "Redfish",
        scientific_name: "Sciaenops ocellatus",
        water: "saltwater",
        habitat: "Redfish typically hold on shallow grass flats, oyster bars and marsh edges in 1 to 4 feet of water.",
        diet: "Redfish feed on crabs, shrimp and mullet, often tailing in shallow water while rooting for prey.",
        size: "Slot redfish usually measure 18 to 27 inches, while bull reds can exceed 40 pounds.",
        best_season: "Fall is peak season, when schools of bull redfish gather near passes to spawn.",
        techniques: &[
            "Sight casting gold spoons to tailing fish",
            "Working soft plastic paddle tails along oyster bars",
            "Soaking cut mullet on a fish-finder rig near passes",
        ],
        regions: &["florida", "texas", "louisiana"],
    },
    SpeciesProfile {
        slug: "snook",
        name: "Snook",
        scientific_name: "Centropomus undecimalis",
        water: "saltwater",
        habitat: "Snook prefer mangrove shorelines, dock lights and inlets, and they cannot survive water below about 60 degrees.",
        diet: "Snook are ambush feeders that eat pilchards, pinfish, shrimp and small crabs swept past structure on the tide.",
        size: "Most snook caught inshore run 20 to 30 inches, and the Florida slot is typically 28 to 32 inches.",
        best_season: "Summer brings snook to beaches and passes to spawn, and fall pushes them back into rivers and canals.",
        techniques: &[
            "Free-lining live pilchards on a 30 pound fluorocarbon leader",
            "Walking topwater plugs along mangrove edges at dawn",
            "Drifting bucktail jigs through passes on an outgoing tide",
        ],
        regions: &["florida"],
    },
    SpeciesProfile {
        slug: "speckled-trout",
        name: "Speckled Trout",
        scientific_name: "Cynoscion nebulosus",
        water: "saltwater",
        habitat: "Speckled trout usually hold over grass flats in 3 to 6 feet of water and slide into deeper holes during cold fronts.",
        diet: "Speckled trout feed on shrimp and small baitfish such as pinfish, menhaden and mullet.",
        size: "Average speckled trout weigh 1 to 3 pounds, and fish over 25 inches are called gator trout.",
        best_season: "Spring and fall are the most consistent seasons, with winter fish stacking in deep canals.",
        techniques: &[
            "Popping cork rigs with live shrimp over grass flats",
            "Slow-rolling soft plastic jerkbaits across sand holes",
            "Twitching suspending twitchbaits on cold mornings",
        ],
        regions: &["florida", "texas", "louisiana"],
    },
    SpeciesProfile {
        slug: "tarpon",
        name: "Tarpon",
        scientific_name: "Megalops atlanticus",
        water: "saltwater",
        habitat: "Tarpon roam coastal beaches, passes and bridges, and juveniles live in brackish backcountry creeks.",
        diet: "Tarpon feed on crabs, mullet, pinfish and threadfin herring, often rolling at the surface at dawn.",
        size: "Adult tarpon commonly reach 60 to 150 pounds and can grow past 8 feet long.",
        best_season: "The migration peaks from May through July, when tarpon string along beaches and crowd passes.",
        techniques: &[
            "Drifting live crabs through passes on the outgoing tide",
            "Casting swim baits to rolling fish along the beach",
            "Bowing to the fish on every jump to keep the hook set",
        ],
        regions: &["florida", "texas"],
    },
    SpeciesProfile {
        slug: "largemouth-bass",
        name: "Largemouth Bass",
        scientific_name: "Micropterus salmoides",
        water: "freshwater",
        habitat: "Largemouth bass hold near vegetation, laydowns, docks and drop-offs in lakes, ponds and slow rivers.",
        diet: "Largemouth bass eat shad, bluegill, crawfish and frogs, and larger fish take almost anything they can swallow.",
        size: "Most largemouth bass weigh 2 to 5 pounds, and Florida-strain fish can top 10 pounds.",
        best_season: "Spring spawning season puts bass in shallow water, when water temperatures reach about 60 to 65 degrees.",
        techniques: &[
            "Flipping soft plastic creature baits into heavy cover",
            "Burning spinnerbaits along grass lines in the wind",
            "Dragging Texas-rigged worms across offshore structure",
        ],
        regions: &["florida", "texas", "georgia"],
    },
    SpeciesProfile {
        slug: "flounder",
        name: "Flounder",
        scientific_name: "Paralichthys lethostigma",
        water: "saltwater",
        habitat: "Flounder lie buried on sandy or muddy bottom near creek mouths, docks and inlet edges.",
        diet: "Flounder ambush mud minnows, finger mullet and shrimp that drift past on the tide.",
        size: "Southern flounder usually measure 14 to 20 inches, and doormats over 5 pounds are prized.",
        best_season: "Fall is prime season, when flounder migrate through inlets toward offshore spawning grounds.",
        techniques: &[
            "Dragging a Carolina-rigged mud minnow along the bottom",
            "Hopping a bucktail jig tipped with a strip of shrimp",
            "Waiting a few seconds before setting the hook on a bite",
        ],
        regions: &["north carolina", "south carolina", "texas"],
    },
    SpeciesProfile {
        slug: "sheepshead",
        name: "Sheepshead",
        scientific_name: "Archosargus probatocephalus",
        water: "saltwater",
        habitat: "Sheepshead live around pilings, bridges, jetties and rock piles covered in barnacles.",
        diet: "Sheepshead eat barnacles, fiddler crabs, oysters and shrimp with their human-like teeth.",
        size: "Typical sheepshead weigh 2 to 4 pounds, and fish over 8 pounds are rare.",
        best_season: "Winter and early spring are peak months, when sheepshead crowd nearshore structure to spawn.",
        techniques: &[
            "Fishing fiddler crabs on a short leader tight to pilings",
            "Scraping barnacles off pilings to start a chum line",
            "Using small strong hooks and setting on the lightest tap",
        ],
        regions: &["florida", "georgia", "south carolina"],
    },
    SpeciesProfile {
        slug: "mahi-mahi",
        name: "Mahi Mahi",
        scientific_name: "Coryphaena hippurus",
        water: "saltwater",
        habitat: "Mahi mahi roam offshore blue water and gather under floating weed lines, debris and buoys.",
        diet: "Mahi mahi feed on flying fish, small tuna, squid and baitfish sheltering under floating cover.",
        size: "Schoolie mahi mahi run 5 to 15 pounds, and bull dolphin can exceed 40 pounds.",
        best_season: "Spring and summer bring the best action, with fish following warm Gulf Stream water north.",
        techniques: &[
            "Trolling ballyhoo along weed lines at 6 to 8 knots",
            "Keeping one hooked fish in the water to hold the school",
            "Pitching chunked bait to fish holding under debris",
        ],
        regions: &["florida", "north carolina"],
    },
];

pub const LOCATIONS: &[LocationProfile] = &[
    LocationProfile {
        slug: "tampa-bay",
        name: "Tampa Bay",
        region: "Florida Gulf Coast",
        water: "saltwater",
        overview: "Tampa Bay is the largest open-water estuary in Florida, with grass flats, mangrove islands, bridges and deep shipping channels.",
        best_seasons: "Spring and fall offer the most consistent fishing, with tarpon arriving in May and snook moving into the passes in summer.",
        species: &["snook", "redfish", "speckled-trout", "tarpon", "sheepshead"],
        access: &[
            "Fort De Soto Park has boat ramps, wade-fishing flats and fishing piers.",
            "The Skyway Fishing Pier reaches deep water near the main shipping channel.",
            "Kayak launches at Weedon Island lead straight onto mangrove shorelines.",
        ],
    },
    LocationProfile {
        slug: "charlotte-harbor",
        name: "Charlotte Harbor",
        region: "Southwest Florida",
        water: "saltwater",
        overview: "Charlotte Harbor is a sprawling estuary fed by the Peace and Myakka rivers and guarded by Boca Grande Pass.",
        best_seasons: "Tarpon peak in May and June in Boca Grande Pass, and redfish school on the flats from August through October.",
        species: &["tarpon", "redfish", "snook", "speckled-trout"],
        access: &[
            "Boca Grande Pass is reachable by boat from Placida and Englewood ramps.",
            "Wade anglers work the east-side flats from Ponce de Leon Park.",
            "Bridges at Punta Gorda hold snook and sheepshead through the winter.",
        ],
    },
    LocationProfile {
        slug: "galveston-bay",
        name: "Galveston Bay",
        region: "Upper Texas Coast",
        water: "saltwater",
        overview: "Galveston Bay is a shallow estuary with oyster reefs, marsh shorelines and jetties at the Bolivar Roads entrance.",
        best_seasons: "Fall brings the flounder run and schooling speckled trout under birds, and spring is strong for redfish.",
        species: &["speckled-trout", "redfish", "flounder", "sheepshead"],
        access: &[
            "The Galveston jetties hold fish year round and are reachable on foot or by boat.",
            "Public ramps at Eagle Point and Texas City Dike open onto the main bay.",
            "Wade fishing along the West Bay shorelines is popular in spring.",
        ],
    },
    LocationProfile {
        slug: "mosquito-lagoon",
        name: "Mosquito Lagoon",
        region: "Florida Atlantic Coast",
        water: "saltwater",
        overview: "Mosquito Lagoon is a shallow, clear estuary within Canaveral National Seashore known for sight fishing to tailing redfish.",
        best_seasons: "Late summer and fall put schools of bull redfish on the flats, and winter brings gin-clear water for sight casting.",
        species: &["redfish", "speckled-trout", "snook", "flounder"],
        access: &[
            "Launches at Haulover Canal and River Breeze Park lead onto the northern flats.",
            "Poling skiffs and kayaks are the best way to approach spooky fish.",
            "Pole and troll zones restrict outboard use over sensitive seagrass areas.",
        ],
    },
    LocationProfile {
        slug: "lake-okeechobee",
        name: "Lake Okeechobee",
        region: "South Florida",
        water: "freshwater",
        overview: "Lake Okeechobee is the largest freshwater lake in Florida, with vast grass beds, reed lines and canal rim structure.",
        best_seasons: "Winter and early spring are best, when largemouth bass spawn in the shallow grass from December through March.",
        species: &["largemouth-bass"],
        access: &[
            "Clewiston and Okeechobee City have full-service ramps and guides.",
            "The rim canal offers protected water when wind blows across the main lake.",
            "Water levels change access to the shallow marshes from season to season.",
        ],
    },
    LocationProfile {
        slug: "outer-banks",
        name: "Outer Banks",
        region: "North Carolina Coast",
        water: "saltwater",
        overview: "The Outer Banks are a chain of barrier islands with surf beaches, sounds and quick access to the Gulf Stream.",
        best_seasons: "Fall brings the red drum run to the surf, and spring and summer are prime for mahi mahi offshore.",
        species: &["redfish", "flounder", "speckled-trout", "mahi-mahi"],
        access: &[
            "Cape Point at Buxton is a famous surf spot reachable with an off-road vehicle permit.",
            "Oregon Inlet is the main port for offshore trips to the Gulf Stream.",
            "Piers at Nags Head and Avon offer access to deeper surf troughs.",
        ],
    },
];

pub const HOW_TO: &[HowToProfile] = &[
    HowToProfile {
        slug: "tie-a-palomar-knot",
        title: "How to Tie a Palomar Knot",
        difficulty: "beginner",
        gear: &["Fishing line", "Hook or lure", "Line clippers"],
        steps: &[
            ("Double the line", "Fold about 6 inches of line back on itself to form a loop and pass the loop through the hook eye."),
            ("Tie an overhand knot", "Tie a loose overhand knot with the doubled line, letting the hook hang from the bottom of the knot."),
            ("Pass the hook through the loop", "Pull the end of the loop over the hook or lure so the loop passes completely around it."),
            ("Moisten and tighten", "Wet the knot and pull both the standing line and the tag end to seat it snugly against the eye."),
            ("Trim the tag end", "Clip the tag end to about an eighth of an inch, leaving a little tail so the knot cannot slip."),
        ],
    },
    HowToProfile {
        slug: "rig-a-live-shrimp",
        title: "How to Rig a Live Shrimp",
        difficulty: "beginner",
        gear: &["Live shrimp", "1/0 circle hook", "20 pound fluorocarbon leader", "Popping cork (optional)"],
        steps: &[
            ("Choose a lively shrimp", "Pick a shrimp that kicks hard in the bait well; a lively bait draws more strikes than a tired one."),
            ("Find the dark spot", "Locate the dark spot in the head, which is the brain, and avoid hooking through it."),
            ("Hook under the horn", "Pass the hook point sideways under the horn, just in front of the dark spot, so the shrimp stays alive."),
            ("Set the depth", "Add a popping cork 2 to 3 feet above the hook over grass flats, or free-line it near structure."),
            ("Cast gently", "Lob the bait with a soft sidearm cast so the shrimp does not tear off the hook on impact."),
        ],
    },
    HowToProfile {
        slug: "cast-a-spinning-reel",
        title: "How to Cast a Spinning Reel",
        difficulty: "beginner",
        gear: &["Spinning rod and reel", "Practice weight or lure"],
        steps: &[
            ("Set the line length", "Reel the lure up until it hangs about 12 inches below the rod tip."),
            ("Pin the line", "Hold the line against the rod with your index finger and open the bail."),
            ("Bring the rod back", "Swing the rod back over your shoulder smoothly, pointing the tip behind you."),
            ("Release on the forward stroke", "Snap the rod forward and lift your finger off the line when the rod tip points at the target."),
            ("Close the bail", "Turn the handle to close the bail and take up slack as the lure lands."),
        ],
    },
    HowToProfile {
        slug: "read-a-tide-chart",
        title: "How to Read a Tide Chart",
        difficulty: "intermediate",
        gear: &["Tide chart or tide app", "Local map of the fishing area"],
        steps: &[
            ("Pick the nearest station", "Choose the tide station closest to where you plan to fish, since timing shifts along the coast."),
            ("Find high and low tide", "Note the times and heights of each high and low tide for your fishing day."),
            ("Look for moving water", "Plan to fish the hours around peak flow, usually the middle of an incoming or outgoing tide."),
            ("Adjust for location", "Back bays and creeks lag the station by 30 minutes or more, so add a correction."),
            ("Match tide to structure", "Fish flats on higher water and channel edges or passes on the falling tide."),
        ],
    },
    HowToProfile {
        slug: "release-a-fish-safely",
        title: "How to Release a Fish Safely",
        difficulty: "beginner",
        gear: &["Dehooking tool", "Rubber landing net", "Wet towel or gloves"],
        steps: &[
            ("Land the fish quickly", "Use tackle heavy enough to land the fish fast so it is not exhausted."),
            ("Keep it in the water", "Leave the fish in the water while unhooking whenever possible, and support its belly if you lift it."),
            ("Remove the hook", "Back the hook out with a dehooking tool, or cut the line close if the fish is hooked deep."),
            ("Revive the fish", "Hold the fish upright facing into the current until it kicks away under its own power."),
            ("Use a descending device", "For deep-water fish with barotrauma, return them to depth with a descending device."),
        ],
    },
    HowToProfile {
        slug: "throw-a-cast-net",
        title: "How to Throw a Cast Net",
        difficulty: "intermediate",
        gear: &["Cast net sized for your bait", "Bucket or aerated bait well"],
        steps: &[
            ("Secure the hand line", "Loop the hand line around your wrist and coil the rope loosely in your throwing hand."),
            ("Load the net", "Hold the net a third of the way down and drape one lead line over your shoulder or in your teeth."),
            ("Rotate and release", "Turn your body away from the target and swing through, releasing the net in a smooth arc."),
            ("Let it sink", "Allow the leads to reach the bottom before you pull, so the net closes under the bait."),
            ("Retrieve and empty", "Pull the hand line steadily, lift the net and empty the bait into the well."),
        ],
    },
];

pub const BLOG_TEMPLATES: &[BlogTemplate] = &[
    BlogTemplate { pattern: "best-lures-for-{}", category: "gear" },
    BlogTemplate { pattern: "{}-fishing-tips", category: "tips" },
    BlogTemplate { pattern: "when-to-catch-{}", category: "seasonal" },
    BlogTemplate { pattern: "where-to-find-{}", category: "tips" },
];

/// A blog slug resolved back to the template and species that produce it.
#[derive(Debug, Clone, Copy)]
pub struct BlogTopic {
    pub template: BlogTemplate,
    pub species: SpeciesProfile,
}

pub fn species(slug: &str) -> Option<&'static SpeciesProfile> {
    SPECIES.iter().find(|s| s.slug == slug)
}

pub fn location(slug: &str) -> Option<&'static LocationProfile> {
    LOCATIONS.iter().find(|l| l.slug == slug)
}

pub fn how_to(slug: &str) -> Option<&'static HowToProfile> {
    HOW_TO.iter().find(|h| h.slug == slug)
}

pub fn blog_topic(slug: &str) -> Option<BlogTopic> {
    BLOG_TEMPLATES.iter().find_map(|template| {
        SPECIES
            .iter()
            .find(|s| template.pattern.replace("{}", s.slug) == slug)
            .map(|s| BlogTopic {
                template: *template,
                species: *s,
            })
    })
}

/// Every slug the catalog can produce for a page type, in seeding order.
pub fn candidate_slugs(page_type: PageType) -> Vec<String> {
    match page_type {
        PageType::Blog => BLOG_TEMPLATES
            .iter()
            .flat_map(|t| SPECIES.iter().map(move |s| t.pattern.replace("{}", s.slug)))
            .collect(),
        PageType::Species => SPECIES.iter().map(|s| s.slug.to_string()).collect(),
        PageType::HowTo => HOW_TO.iter().map(|h| h.slug.to_string()).collect(),
        PageType::Location => LOCATIONS.iter().map(|l| l.slug.to_string()).collect(),
    }
}
