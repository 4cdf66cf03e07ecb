use blockyard_inventory::{InventoryLedger, Mode, Selection};

/// Text for the heads-up display.
pub struct Hud;

impl Hud {
    /// Inventory strip, with the selected kind in brackets:
    /// `[GRASS: 100]  STONE: 50  WOOD: 30  SAND: 40  GOLD: 20  `
    pub fn inventory_line(ledger: &InventoryLedger, selection: &Selection) -> String {
        let mut line = String::new();
        for (kind, count) in ledger.iter() {
            let name = kind.name().to_ascii_uppercase();
            if kind == selection.selected {
                line.push_str(&format!("[{name}: {count}]  "));
            } else {
                line.push_str(&format!("{name}: {count}  "));
            }
        }
        line
    }

    pub fn mode_label(mode: Mode) -> &'static str {
        mode.label()
    }

    /// Both lines joined, as the terminal front end prints them.
    pub fn status(ledger: &InventoryLedger, selection: &Selection) -> String {
        format!(
            "{} | {}",
            Self::mode_label(selection.mode),
            Self::inventory_line(ledger, selection).trim_end()
        )
    }
}
