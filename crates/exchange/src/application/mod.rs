mod exchange;
mod security;

pub use exchange::Exchange;
pub use security::Security;
