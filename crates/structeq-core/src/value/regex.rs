use std::fmt;
use std::rc::Rc;

use crate::errors::{Result, StructEqError};

/// Recognised mode flags
pub const VALID_FLAGS: &str = "dgimsuvy";

/// A regular expression literal: pattern source plus mode flags
///
/// The pattern is not compiled. Flags are validated but kept verbatim, so
/// `gi` and `ig` remain distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegExpValue {
    source: Rc<str>,
    flags: Rc<str>,
}

impl RegExpValue {
    pub fn new(source: impl Into<Rc<str>>, flags: &str) -> Result<Self> {
        validate_flags(flags)?;
        Ok(Self {
            source: source.into(),
            flags: Rc::from(flags),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }
}

fn validate_flags(flags: &str) -> Result<()> {
    let mut seen = String::with_capacity(flags.len());
    for flag in flags.chars() {
        if !VALID_FLAGS.contains(flag) {
            return Err(StructEqError::InvalidRegexFlag {
                flags: flags.to_string(),
                flag,
            });
        }
        if seen.contains(flag) {
            return Err(StructEqError::DuplicateRegexFlag {
                flags: flags.to_string(),
                flag,
            });
        }
        seen.push(flag);
    }
    if seen.contains('u') && seen.contains('v') {
        return Err(StructEqError::ConflictingRegexFlags {
            flags: flags.to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for RegExpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_kept_verbatim() {
        let re = RegExpValue::new("ab+c", "ig").unwrap();
        assert_eq!(re.source(), "ab+c");
        assert_eq!(re.flags(), "ig");
        assert!(re.has_flag('g'));
        assert!(!re.has_flag('m'));
    }

    #[test]
    fn test_empty_flags_allowed() {
        assert!(RegExpValue::new("x", "").is_ok());
    }

    #[test]
    fn test_unknown_flag() {
        let err = RegExpValue::new("x", "gz").unwrap_err();
        assert_eq!(
            err,
            StructEqError::InvalidRegexFlag {
                flags: "gz".to_string(),
                flag: 'z',
            }
        );
    }

    #[test]
    fn test_duplicate_flag() {
        let err = RegExpValue::new("x", "gig").unwrap_err();
        assert!(matches!(err, StructEqError::DuplicateRegexFlag { flag: 'g', .. }));
    }

    #[test]
    fn test_u_and_v_conflict() {
        let err = RegExpValue::new("x", "uv").unwrap_err();
        assert!(matches!(err, StructEqError::ConflictingRegexFlags { .. }));
    }

    #[test]
    fn test_display() {
        let re = RegExpValue::new("a/b", "m").unwrap();
        assert_eq!(re.to_string(), "/a/b/m");
    }
}
