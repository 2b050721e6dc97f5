//! The One Pace saga/arc table.

use crate::types::ChapterRange;

/// Static description of an arc.
#[derive(Debug, Clone, Copy)]
pub struct ArcSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub chapters: Option<ChapterRange>,
}

/// Static description of a saga.
#[derive(Debug, Clone, Copy)]
pub struct SagaSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub arcs: &'static [ArcSpec],
}

const fn arc(name: &'static str, start: u32, end: u32) -> ArcSpec {
    ArcSpec {
        name,
        aliases: &[],
        chapters: Some(ChapterRange::new(start, end)),
    }
}

const fn aliased(
    name: &'static str,
    aliases: &'static [&'static str],
    start: u32,
    end: u32,
) -> ArcSpec {
    ArcSpec {
        name,
        aliases,
        chapters: Some(ChapterRange::new(start, end)),
    }
}

pub static ONE_PACE: &[SagaSpec] = &[
    SagaSpec {
        name: "East Blue",
        aliases: &[],
        arcs: &[
            arc("Romance Dawn", 1, 7),
            arc("Orange Town", 8, 21),
            arc("Syrup Village", 22, 41),
            arc("Baratie", 42, 68),
            arc("Arlong Park", 69, 95),
            arc("Loguetown", 96, 100),
        ],
    },
    SagaSpec {
        name: "Arabasta",
        aliases: &[],
        arcs: &[
            arc("Reverse Mountain", 101, 105),
            arc("Whisky Peak", 106, 114),
            arc("Little Garden", 115, 129),
            arc("Drum Island", 130, 154),
            arc("Arabasta", 155, 217),
        ],
    },
    SagaSpec {
        name: "Sky Island",
        aliases: &[],
        arcs: &[arc("Jaya", 218, 236), arc("Skypiea", 237, 302)],
    },
    SagaSpec {
        name: "Water 7",
        aliases: &["Water Seven"],
        arcs: &[
            arc("Long Ring Long Land", 303, 321),
            aliased("Water 7", &["Water Seven"], 322, 374),
            arc("Enies Lobby", 375, 430),
            arc("Post-Enies Lobby", 431, 441),
        ],
    },
    SagaSpec {
        name: "Thriller Bark",
        aliases: &[],
        arcs: &[arc("Thriller Bark", 442, 489)],
    },
    SagaSpec {
        name: "Summit War",
        aliases: &[],
        arcs: &[
            arc("Sabaody Archipelago", 490, 513),
            arc("Amazon Lily", 514, 524),
            arc("Impel Down", 525, 549),
            arc("Marineford", 550, 580),
            arc("Post-War", 581, 597),
        ],
    },
    SagaSpec {
        name: "Fish-Man Island",
        aliases: &["Fishman Island"],
        arcs: &[
            arc("Return to Sabaody", 598, 602),
            aliased("Fish-Man Island", &["Fishman Island"], 603, 653),
        ],
    },
    SagaSpec {
        name: "Dressrosa",
        aliases: &[],
        arcs: &[arc("Punk Hazard", 654, 699), arc("Dressrosa", 700, 801)],
    },
    SagaSpec {
        name: "Whole Cake Island",
        aliases: &[],
        arcs: &[
            arc("Zou", 802, 824),
            arc("Whole Cake Island", 825, 902),
            aliased("Levely", &["Reverie"], 903, 908),
        ],
    },
    SagaSpec {
        name: "Wano Country",
        aliases: &[],
        arcs: &[aliased("Wano Country", &["Wano"], 909, 1057)],
    },
    SagaSpec {
        name: "Final",
        aliases: &[],
        arcs: &[
            arc("EggHead", 1058, 1125),
            // 1126-present
            ArcSpec {
                name: "Elbaph",
                aliases: &[],
                chapters: None,
            },
        ],
    },
];
