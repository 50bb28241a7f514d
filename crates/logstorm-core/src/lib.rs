mod config;
pub use config::Config;

mod dispatcher;
pub use dispatcher::Dispatcher;

mod token;
pub use token::TokenCell;

mod worker;
