//! # vCard 3.0 output
//!
//! Renders a decoded [`Entry`] as a vCard 3.0 text card. The field
//! values are written verbatim; vCard escaping of `;`, `,` and
//! newlines is out of scope for phonebook exports.

use std::fmt;

use crate::entry::Entry;

/// A vCard 3.0 rendering of an entry
#[derive(Debug, Copy, Clone)]
pub struct VCard<'a>(pub &'a Entry);

impl Entry {
    /// Render this entry as a vCard 3.0 card
    pub fn vcard(&self) -> VCard<'_> {
        VCard(self)
    }
}

impl fmt::Display for VCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BEGIN:VCARD")?;
        writeln!(f, "VERSION:3.0")?;
        writeln!(f, "N:{}", self.0.name)?;
        writeln!(f, "FN:{}", self.0.name)?;
        writeln!(f, "TEL;type=HOME:{}", self.0.phone)?;
        writeln!(f, "END:VCARD")
    }
}

#[cfg(test)]
mod tests {
    use crate::entry::Entry;

    #[test]
    fn test_render() {
        let entry = Entry {
            name: "Bob".to_string(),
            phone: "+1234".to_string(),
        };
        assert_eq!(
            entry.vcard().to_string(),
            "BEGIN:VCARD\n\
             VERSION:3.0\n\
             N:Bob\n\
             FN:Bob\n\
             TEL;type=HOME:+1234\n\
             END:VCARD\n"
        );
    }

    #[test]
    fn test_render_empty_fields() {
        let entry = Entry {
            name: String::new(),
            phone: String::new(),
        };
        let card = entry.vcard().to_string();
        assert!(card.contains("N:\n"));
        assert!(card.contains("TEL;type=HOME:\n"));
    }
}
