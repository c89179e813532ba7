
#[cfg(test)]
pub use self::funky::*;
