mod monetary;

pub use monetary::{chart_value, line_total, Money, MONEY_SCALE};

pub type Quantity = u32;
