//! Built-in formation templates for five-a-side up to full eleven.
//!
//! Percent coordinates place slot centers on a portrait pitch: y=90 sits in
//! front of your own goal, y=20 near the opponent box.

use super::{Formation, SlotSpec, MAX_SQUAD_SIZE, MIN_SQUAD_SIZE};
use fxhash::FxHashMap;
use once_cell::sync::Lazy;

static CATALOG: Lazy<FxHashMap<u8, Formation>> = Lazy::new(|| {
    let mut catalog = FxHashMap::default();
    catalog.insert(5, create_five_a_side());
    catalog.insert(6, create_six_a_side());
    catalog.insert(7, create_seven_a_side());
    catalog.insert(8, create_eight_a_side());
    catalog.insert(9, create_nine_a_side());
    catalog.insert(10, create_ten_a_side());
    catalog.insert(11, create_eleven_a_side());
    catalog
});

/// Default template for a squad size, `None` outside 5..=11.
pub fn for_squad_size(size: u8) -> Option<Formation> {
    CATALOG.get(&size).cloned()
}

/// Every built-in size template, smallest side first.
pub fn all_formations() -> Vec<Formation> {
    (MIN_SQUAD_SIZE..=MAX_SQUAD_SIZE).filter_map(for_squad_size).collect()
}

/// The classic 4-4-2 used for fresh eleven-a-side boards.
pub fn classic_442() -> Formation {
    Formation::new(
        "4-4-2",
        vec![
            SlotSpec::new("GK", "GK", 50.0, 90.0),
            SlotSpec::new("LB", "LB", 20.0, 70.0),
            SlotSpec::new("CB1", "CB", 40.0, 70.0),
            SlotSpec::new("CB2", "CB", 60.0, 70.0),
            SlotSpec::new("RB", "RB", 80.0, 70.0),
            SlotSpec::new("LM", "LM", 20.0, 45.0),
            SlotSpec::new("CM1", "CM", 40.0, 45.0),
            SlotSpec::new("CM2", "CM", 60.0, 45.0),
            SlotSpec::new("RM", "RM", 80.0, 45.0),
            SlotSpec::new("ST1", "ST", 40.0, 20.0),
            SlotSpec::new("ST2", "ST", 60.0, 20.0),
        ],
    )
}

fn create_five_a_side() -> Formation {
    Formation::new(
        "5-a-side",
        vec![
            SlotSpec::new("GK", "GK", 50.0, 90.0),
            SlotSpec::new("CB", "CB", 50.0, 70.0),
            SlotSpec::new("LM", "LM", 30.0, 50.0),
            SlotSpec::new("RM", "RM", 70.0, 50.0),
            SlotSpec::new("CF", "CF", 50.0, 25.0),
        ],
    )
}

fn create_six_a_side() -> Formation {
    Formation::new(
        "6-a-side",
        vec![
            SlotSpec::new("GK", "GK", 50.0, 90.0),
            SlotSpec::new("CB1", "CB", 40.0, 70.0),
            SlotSpec::new("CB2", "CB", 60.0, 70.0),
            SlotSpec::new("LM", "LM", 30.0, 50.0),
            SlotSpec::new("RM", "RM", 70.0, 50.0),
            SlotSpec::new("CF", "CF", 50.0, 25.0),
        ],
    )
}

fn create_seven_a_side() -> Formation {
    Formation::new(
        "7-a-side",
        vec![
            SlotSpec::new("GK", "GK", 50.0, 90.0),
            SlotSpec::new("CB1", "CB", 40.0, 70.0),
            SlotSpec::new("CB2", "CB", 60.0, 70.0),
            SlotSpec::new("LM", "LM", 20.0, 55.0),
            SlotSpec::new("CM", "CM", 50.0, 50.0),
            SlotSpec::new("RM", "RM", 80.0, 55.0),
            SlotSpec::new("CF", "CF", 50.0, 25.0),
        ],
    )
}

fn create_eight_a_side() -> Formation {
    Formation::new(
        "8-a-side",
        vec![
            SlotSpec::new("GK", "GK", 50.0, 90.0),
            SlotSpec::new("LB", "LB", 20.0, 70.0),
            SlotSpec::new("CB", "CB", 50.0, 70.0),
            SlotSpec::new("RB", "RB", 80.0, 70.0),
            SlotSpec::new("LM", "LM", 30.0, 50.0),
            SlotSpec::new("CM", "CM", 50.0, 50.0),
            SlotSpec::new("RM", "RM", 70.0, 50.0),
            SlotSpec::new("CF", "CF", 50.0, 25.0),
        ],
    )
}

fn create_nine_a_side() -> Formation {
    Formation::new(
        "9-a-side",
        vec![
            SlotSpec::new("GK", "GK", 50.0, 90.0),
            SlotSpec::new("LB", "LB", 20.0, 70.0),
            SlotSpec::new("CB", "CB", 50.0, 70.0),
            SlotSpec::new("RB", "RB", 80.0, 70.0),
            SlotSpec::new("CM", "CM", 40.0, 55.0),
            SlotSpec::new("DM", "DM", 60.0, 60.0),
            SlotSpec::new("LW", "LW", 25.0, 25.0),
            SlotSpec::new("CF", "CF", 50.0, 20.0),
            SlotSpec::new("RW", "RW", 75.0, 25.0),
        ],
    )
}

fn create_ten_a_side() -> Formation {
    Formation::new(
        "10-a-side",
        vec![
            SlotSpec::new("GK", "GK", 50.0, 90.0),
            SlotSpec::new("LB", "LB", 15.0, 70.0),
            SlotSpec::new("CB1", "CB", 35.0, 70.0),
            SlotSpec::new("CB2", "CB", 65.0, 70.0),
            SlotSpec::new("RB", "RB", 85.0, 70.0),
            SlotSpec::new("LM", "LM", 30.0, 50.0),
            SlotSpec::new("CM", "CM", 50.0, 50.0),
            SlotSpec::new("RM", "RM", 70.0, 50.0),
            SlotSpec::new("CF1", "CF", 40.0, 25.0),
            SlotSpec::new("CF2", "CF", 60.0, 25.0),
        ],
    )
}

fn create_eleven_a_side() -> Formation {
    Formation::new(
        "11-a-side",
        vec![
            SlotSpec::new("GK", "GK", 50.0, 90.0),
            SlotSpec::new("LB", "LB", 20.0, 70.0),
            SlotSpec::new("CB1", "CB", 40.0, 70.0),
            SlotSpec::new("CB2", "CB", 60.0, 70.0),
            SlotSpec::new("RB", "RB", 80.0, 70.0),
            SlotSpec::new("DM", "DM", 50.0, 60.0),
            SlotSpec::new("LM", "LM", 30.0, 45.0),
            SlotSpec::new("RM", "RM", 70.0, 45.0),
            SlotSpec::new("AM", "AM", 50.0, 35.0),
            SlotSpec::new("CF1", "CF", 40.0, 20.0),
            SlotSpec::new("CF2", "CF", 60.0, 20.0),
        ],
    )
}
