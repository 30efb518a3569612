//! Product and customer name generators.

use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

/// Source of random words and person names.
///
/// Any locale or library can back this; the generator only needs these two
/// capabilities.
pub trait NameSource {
    /// A single random word.
    fn random_word<R: Rng>(&self, rng: &mut R) -> String;

    /// A random full person name.
    fn random_person_name<R: Rng>(&self, rng: &mut R) -> String;
}

/// English words and names from the `fake` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeNames;

impl NameSource for FakeNames {
    fn random_word<R: Rng>(&self, rng: &mut R) -> String {
        Word().fake_with_rng(rng)
    }

    fn random_person_name<R: Rng>(&self, rng: &mut R) -> String {
        Name().fake_with_rng(rng)
    }
}

pub fn generate_product<N: NameSource, R: Rng>(names: &N, rng: &mut R) -> String {
    names.random_word(rng)
}

pub fn generate_customer<N: NameSource, R: Rng>(names: &N, rng: &mut R) -> String {
    names.random_person_name(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fake_word() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let word = generate_product(&FakeNames, &mut rng);
            assert!(!word.is_empty());
            assert!(!word.contains(char::is_whitespace));
        }
    }

    #[test]
    fn test_fake_person_name() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let name = generate_customer(&FakeNames, &mut rng);
            assert!(name.contains(' '), "expected a full name, got {name:?}");
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_product(&FakeNames, &mut rng1),
            generate_product(&FakeNames, &mut rng2)
        );
        assert_eq!(
            generate_customer(&FakeNames, &mut rng1),
            generate_customer(&FakeNames, &mut rng2)
        );
    }
}
