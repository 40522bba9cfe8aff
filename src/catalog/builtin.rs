//! Bundled territory catalog
//!
//! Shapes are hand-authored on a 960x600 canvas. Neighbouring territories
//! share border segments, which are defined once below and spliced into each
//! outline so the borders line up exactly.

use crate::catalog::territory::{AcquisitionMethod, Cost, Territory};
use crate::core::types::{Point, TerritoryId};

pub mod colors {
    pub const ORIGINAL: &str = "#1d4ed8";
    pub const LOUISIANA: &str = "#d97706";
    pub const FLORIDA: &str = "#ef4444";
    pub const TEXAS: &str = "#be185d";
    pub const OREGON: &str = "#15803d";
    pub const MEXICAN: &str = "#c2410c";
    pub const GADSDEN: &str = "#eab308";
    pub const ALASKA: &str = "#0ea5e9";
    pub const HAWAII: &str = "#14b8a6";
}

// Mississippi River, source to mouth
macro_rules! ms_river {
    () => {
        "L 565,90 C 565,100 575,110 570,130 C 565,150 560,160 565,180 C 570,200 560,220 555,240 \
         C 550,260 540,280 545,300 C 550,320 540,340 542,360 C 545,380 535,400 540,420 \
         C 545,440 550,460 555,480"
    };
}

// Mississippi River, mouth to source
macro_rules! ms_river_rev {
    () => {
        "L 555,480 C 550,460 545,440 540,420 C 535,400 545,380 542,360 C 540,340 550,320 545,300 \
         C 540,280 550,260 555,240 C 560,220 570,200 565,180 C 560,160 565,150 570,130 \
         C 575,110 565,100 565,90"
    };
}

// 49th parallel, west to east
macro_rules! parallel_49_rev {
    () => {
        "L 250,60 L 520,60"
    };
}

macro_rules! parallel_42 {
    () => {
        "L 155,190 L 330,190"
    };
}

// Western edge of the Louisiana Purchase (1819 treaty line)
macro_rules! louisiana_west {
    () => {
        "L 480,450 L 460,390 L 400,350 L 380,310 L 380,250 L 330,250 L 310,200 L 290,150 \
         L 280,100 L 250,60"
    };
}

// Atlantic coast, north to south, ending at the St Marys River
macro_rules! east_coast {
    () => {
        "L 880,30 L 920,50 L 900,100 L 880,150 L 840,200 L 820,250 L 780,300 L 740,350 \
         L 730,400 L 700,430"
    };
}

// Northern Florida border, St Marys to the Mississippi mouth
macro_rules! florida_north {
    () => {
        "L 700,430 L 640,430 L 610,435 L 590,440 L 570,470 L 555,480"
    };
}

/// Ghost outline of the full map, drawn beneath every region
pub const OUTLINE_PATH: &str = concat!(
    "M 555,480 L 570,470 L 590,440 L 610,435 L 640,430 L 700,430 L 730,460 L 750,550 ",
    "L 730,590 L 680,550 L 650,480 L 600,480 L 555,480 ",
    "M 555,480 L 550,460 545,440 540,420 535,400 545,380 542,360 540,340 550,320 545,300 ",
    "540,280 550,260 555,240 560,220 570,200 565,180 560,160 565,150 570,130 575,110 565,100 565,90 ",
    "L 600,80 L 650,120 L 700,100 L 750,60 L 800,50 L 880,30 L 920,50 L 900,100 L 880,150 ",
    "L 840,200 L 820,250 L 780,300 L 740,350 L 730,400 L 700,430 ",
    "M 565,90 L 520,60 L 250,60 L 180,60 L 160,80 L 140,100 L 150,150 L 155,190 ",
    "L 180,300 L 220,380 L 240,400 L 280,450 L 320,450 L 340,430 L 380,480 L 420,520 ",
    "L 450,550 L 480,450 L 460,390 L 400,350 L 380,310 L 380,250 L 330,250 L 310,200 ",
    "L 290,150 L 280,100 L 250,60 ",
    "M 130,450 L 110,450 L 90,460 L 70,480 L 40,480 L 20,500 L 30,520 L 50,540 L 80,550 ",
    "L 110,540 L 130,520 L 140,480 Z ",
    "M 200,520 L 220,530 L 210,540 L 190,530 Z M 230,540 L 250,550 L 240,560 L 220,550 Z ",
    "M 260,560 L 270,570 L 260,575 L 250,565 Z",
);

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    year: i32,
    area_sq_miles: f64,
    cost: Option<Cost>,
    method: AcquisitionMethod,
    from_entity: &str,
    description: &str,
    comparison: &str,
    path: &str,
    color: &str,
    label: (f64, f64),
) -> Territory {
    Territory {
        id: TerritoryId::new(id),
        name: name.into(),
        year,
        area_sq_miles,
        cost,
        method,
        from_entity: from_entity.into(),
        description: description.into(),
        comparison: comparison.into(),
        path: path.into(),
        color: color.into(),
        label: Point::new(label.0, label.1),
    }
}

/// The bundled records in catalog order
pub fn territories() -> Vec<Territory> {
    vec![
        record(
            "original_1783",
            "Original 13 Colonies + 1783",
            1783,
            892_135.0,
            None,
            AcquisitionMethod::Original,
            "Great Britain",
            "The foundation of the United States, extending from the Atlantic to the Mississippi River.",
            "Initial US Territory",
            concat!(
                "M 555,480 ",
                ms_river_rev!(),
                " L 600,80 L 650,120 L 700,100 L 750,60 L 800,50 ",
                east_coast!(),
                " ",
                florida_north!(),
                " Z"
            ),
            colors::ORIGINAL,
            (720.0, 250.0),
        ),
        record(
            "louisiana_1803",
            "Louisiana Purchase",
            1803,
            828_000.0,
            Some(Cost::new(15_000_000, 393_000_000)),
            AcquisitionMethod::Purchase,
            "France",
            "The massive central corridor purchased from France.",
            "Doubled US Size",
            concat!(
                "M 555,480 ",
                louisiana_west!(),
                " ",
                parallel_49_rev!(),
                " L 565,90 ",
                ms_river!(),
                " Z"
            ),
            colors::LOUISIANA,
            (480.0, 220.0),
        ),
        record(
            "florida_1819",
            "Florida",
            1819,
            65_000.0,
            Some(Cost::new(5_000_000, 124_000_000)),
            AcquisitionMethod::Treaty,
            "Spain",
            "Acquired via the Adams-Onís Treaty.",
            "The Sunshine State",
            "M 555,480 L 570,470 L 590,440 L 610,435 L 640,430 L 700,430 L 730,460 L 750,550 \
             L 730,590 L 680,550 L 650,480 L 600,480 L 555,480 Z",
            colors::FLORIDA,
            (720.0, 500.0),
        ),
        record(
            "texas_1845",
            "Texas Annexation",
            1845,
            389_166.0,
            None,
            AcquisitionMethod::Annexation,
            "Republic of Texas",
            "Annexation of the independent Republic of Texas.",
            "The Lone Star State",
            "M 480,450 L 460,390 L 400,350 L 380,310 L 380,250 L 330,250 L 330,400 L 340,430 \
             L 380,480 L 420,520 L 450,550 Z",
            colors::TEXAS,
            (420.0, 420.0),
        ),
        record(
            "oregon_1846",
            "Oregon Territory",
            1846,
            286_541.0,
            None,
            AcquisitionMethod::Treaty,
            "Great Britain",
            "Pacific Northwest acquired by treaty with Britain.",
            "WA, OR, ID",
            concat!(
                "M 250,60 L 180,60 L 160,80 L 140,100 L 150,150 L 155,190 ",
                parallel_42!(),
                " L 330,250 L 310,200 L 290,150 L 280,100 L 250,60 Z"
            ),
            colors::OREGON,
            (240.0, 130.0),
        ),
        record(
            "mexican_cession_1848",
            "Mexican Cession",
            1848,
            529_189.0,
            Some(Cost::new(15_000_000, 565_000_000)),
            AcquisitionMethod::War,
            "Mexico",
            "Southwest acquired after Mexican-American War.",
            "CA, NV, UT, AZ",
            "M 155,190 L 330,190 L 330,250 L 330,400 L 340,430 L 280,430 L 240,400 L 220,380 \
             L 180,300 Z",
            colors::MEXICAN,
            (250.0, 300.0),
        ),
        record(
            "gadsden_1853",
            "Gadsden Purchase",
            1853,
            29_670.0,
            Some(Cost::new(10_000_000, 350_000_000)),
            AcquisitionMethod::Purchase,
            "Mexico",
            "Southern AZ/NM purchased for railroad.",
            "Railroad Route",
            "M 240,400 L 280,430 L 340,430 L 320,450 L 280,450 L 240,400 Z",
            colors::GADSDEN,
            (290.0, 435.0),
        ),
        record(
            "alaska_1867",
            "Alaska",
            1867,
            586_412.0,
            Some(Cost::new(7_200_000, 145_000_000)),
            AcquisitionMethod::Purchase,
            "Russia",
            "Purchased from Russia.",
            "Largest State",
            "M 130,450 L 110,450 L 90,460 L 70,480 L 40,480 L 20,500 L 30,520 L 50,540 L 80,550 \
             L 110,540 L 130,520 L 140,480 Z",
            colors::ALASKA,
            (80.0, 510.0),
        ),
        record(
            "hawaii_1898",
            "Hawaii",
            1898,
            6_423.0,
            None,
            AcquisitionMethod::Annexation,
            "Hawaii",
            "Pacific archipelago annexed in 1898.",
            "Strategic Outpost",
            "M 200,520 L 220,530 L 210,540 L 190,530 Z M 230,540 L 250,550 L 240,560 L 220,550 Z \
             M 260,560 L 270,570 L 260,575 L 250,565 Z",
            colors::HAWAII,
            (230.0, 570.0),
        ),
    ]
}
