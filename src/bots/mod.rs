pub mod computer;
pub mod human;

pub use computer::ComputerBot;
pub use human::HumanBot;
