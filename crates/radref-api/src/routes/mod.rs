pub mod health;
pub mod schemes;
