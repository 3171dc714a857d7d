// ============================================================================
// Naming Module
// Conway-Wechsler scale names for engineering-notation magnitudes
// ============================================================================

mod scale_table;

pub use scale_table::{ScaleTable, CONWAY_WECHSLER};
