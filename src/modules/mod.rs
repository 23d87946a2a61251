pub mod breakdowns;
pub mod fees;
pub mod health;
pub mod promotions;
