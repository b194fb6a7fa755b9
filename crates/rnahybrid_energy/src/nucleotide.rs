use std::fmt;
use std::ops::Deref;

use colored::*;
use log::warn;

#[derive(Debug)]
pub enum SequenceError {
    InvalidChar(char),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidChar(c) => write!(f, "Unsupported nucleotide: '{}'", c),
        }
    }
}

impl std::error::Error for SequenceError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Nucleotide {
    A,
    C,
    G,
    U,
    N,
}

impl TryFrom<char> for Nucleotide {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Nucleotide::A),
            'C' => Ok(Nucleotide::C),
            'G' => Ok(Nucleotide::G),
            'U' | 'T' => Ok(Nucleotide::U),
            'N' => Ok(Nucleotide::N),
            _ => Err(SequenceError::InvalidChar(c)),
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::U => 'U',
            Nucleotide::N => 'N',
        };
        write!(f, "{}", c)
    }
}

impl Nucleotide {
    /// Watson-Crick + wobble complementarity, the same pairing set
    /// `areComplementary` is allowed to consult.
    pub fn can_pair(&self, other: &Nucleotide) -> bool {
        use Nucleotide::*;
        matches!(
            (self, other),
            (A, U) | (U, A) | (C, G) | (G, C) | (G, U) | (U, G)
        )
    }
}

/// An inter-molecular sequence handed to an `EnergyOracle`. Identified by
/// the caller via `rnahybrid_structure::SequenceId`; this type only owns
/// the underlying bases.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Sequence(pub Vec<Nucleotide>);

impl Deref for Sequence {
    type Target = [Nucleotide];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for Sequence {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for c in s.chars() {
            vec.push(Nucleotide::try_from(c)?);
        }
        Ok(Sequence(vec))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

impl Sequence {
    /// Lossy construction: invalid characters become `N` with a logged
    /// warning, rather than failing the whole parse.
    pub fn from_lossy(s: &str) -> Self {
        let vec = s
            .chars()
            .map(|c| {
                Nucleotide::try_from(c).unwrap_or_else(|e| {
                    warn!("{} {} -> converted to 'N'", "WARNING:".red(), e);
                    Nucleotide::N
                })
            })
            .collect();
        Sequence(vec)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Nucleotide::*;

    #[test]
    fn parses_valid_sequence() {
        let seq = Sequence::try_from("AUCG").unwrap();
        assert_eq!(&seq[..], &[A, U, C, G]);
    }

    #[test]
    fn rejects_invalid_character() {
        let err = Sequence::try_from("AUXG").unwrap_err();
        assert!(matches!(err, SequenceError::InvalidChar('X')));
    }

    #[test]
    fn lossy_parsing_substitutes_n() {
        let seq = Sequence::from_lossy("AUXG");
        assert_eq!(&seq[..], &[A, U, N, G]);
    }

    #[test]
    fn watson_crick_and_wobble_pairs() {
        assert!(A.can_pair(&U));
        assert!(C.can_pair(&G));
        assert!(G.can_pair(&U));
        assert!(!A.can_pair(&C));
        assert!(!N.can_pair(&A));
    }

    #[test]
    fn display_round_trips_letters() {
        let seq = Sequence::try_from("gcau").unwrap();
        assert_eq!(seq.to_string(), "GCAU");
    }
}
