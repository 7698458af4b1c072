use std::collections::BTreeMap;

use crate::access_level::AccessLevel;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub username     : String,
    pub access_level : AccessLevel,
}

/// All members of a single project, keyed by username.
///
/// Includes members inherited from parent groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster(BTreeMap<String, AccessLevel>);

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member. An existing entry with the same username is replaced.
    pub fn insert(&mut self, member: Member) {
        let Member {
            username,
            access_level,
        } = member;
        self.0.insert(username, access_level);
    }

    pub fn access_level(&self, username: &str) -> Option<AccessLevel> {
        self.0.get(username).copied()
    }

    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<Member> for Roster {
    fn extend<I: IntoIterator<Item = Member>>(&mut self, iter: I) {
        for member in iter {
            self.insert(member);
        }
    }
}

impl FromIterator<Member> for Roster {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        let mut roster = Self::new();
        roster.extend(iter);
        roster
    }
}
