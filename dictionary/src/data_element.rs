//! The run-time data element dictionary,
//! indexing the attribute table by tag and by alias.

use crate::tags::ENTRIES;
use dcmstream_core::{Tag, VR};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DICT: Lazy<StandardDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// One does not generally have to call this:
/// the unit type [`StandardDictionary`] already provides
/// a lazily loaded singleton with the relevant look-up methods.
#[inline]
pub fn registry() -> &'static StandardDictionaryRegistry {
    &DICT
}

/// One record of the standard attribute dictionary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DictionaryEntry {
    /// The attribute tag.
    pub tag: Tag,
    /// The attribute's alias, in `PascalCase` keyword form.
    pub alias: &'static str,
    /// The attribute's standard value representation.
    pub vr: VR,
}

/// The data struct actually containing the standard dictionary index.
///
/// This structure is made opaque via the unit type
/// [`StandardDictionary`], which provides a lazily loaded singleton.
#[derive(Debug)]
pub struct StandardDictionaryRegistry {
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntry>,
    /// mapping: alias → entry
    by_name: HashMap<&'static str, &'static DictionaryEntry>,
}

impl StandardDictionaryRegistry {
    fn new() -> Self {
        StandardDictionaryRegistry {
            by_tag: HashMap::with_capacity(ENTRIES.len()),
            by_name: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    fn index(&mut self, entry: &'static DictionaryEntry) -> &mut Self {
        self.by_tag.insert(entry.tag, entry);
        self.by_name.insert(entry.alias, entry);
        self
    }
}

fn init_dictionary() -> StandardDictionaryRegistry {
    let mut d = StandardDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    d
}

/// A data element dictionary which consults
/// the crate's global attribute registry.
///
/// The dictionary index is automatically initialized upon the first use.
/// It is consulted for diagnostics and for value representation
/// inference under implicit VR; it never drives parsing control flow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDictionary;

impl StandardDictionary {
    /// Fetch the dictionary entry for the given tag, if known.
    pub fn entry(tag: Tag) -> Option<&'static DictionaryEntry> {
        registry().by_tag.get(&tag).copied()
    }

    /// Fetch the dictionary entry with the given alias, if known.
    pub fn entry_by_name(name: &str) -> Option<&'static DictionaryEntry> {
        registry().by_name.get(name).copied()
    }

    /// Fetch the attribute alias for the given tag, if known.
    pub fn name_of(tag: Tag) -> Option<&'static str> {
        StandardDictionary::entry(tag).map(|e| e.alias)
    }

    /// The value representation to assume for the given tag
    /// when none is present on the wire (implicit VR data sets).
    /// Unknown attributes are treated as opaque binary.
    pub fn vr_of(tag: Tag) -> VR {
        // group lengths are always UL, including for private groups
        if tag.element() == 0x0000 {
            return VR::UL;
        }
        StandardDictionary::entry(tag).map(|e| e.vr).unwrap_or(VR::UN)
    }
}
