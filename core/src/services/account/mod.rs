//! Maps verified Entra identities onto application accounts.

mod resolver;


pub use resolver::AccountResolver;
