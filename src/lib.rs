#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod conversion;
mod conversions;
pub mod epoch;
mod error;
mod ext;
mod registry;
mod schema;
mod value;
mod wire;

pub use crate::conversion::{Conversion, Descriptor};
pub use crate::conversions::*;
pub use crate::error::{Error, ErrorKind};
pub use crate::registry::{Registry, RegistryBuilder};
pub use crate::schema::{Primitive, Schema};
pub use crate::value::{DomainKind, DomainValue};
pub use crate::wire::{Width, WireValue};

pub type Result<T> = core::result::Result<T, Error>;


#[cfg(test)]
fn random_data<T>(n: usize) -> alloc::vec::Vec<T>
where
    rand::distributions::Standard: rand::distributions::Distribution<T>,
{
    let n = limit_miri(n);
    use rand::prelude::*;
    let mut rng = rand_chacha::ChaCha20Rng::from_seed(Default::default());
    (0..n).map(|_| rng.gen()).collect()
}
#[cfg(test)]
fn limit_miri(n: usize) -> usize {
    if cfg!(miri) {
        (n / 100).clamp(10, 1000)
    } else {
        n
    }
}
