use std::{collections::HashMap, io, sync::Arc};

mod entities;
pub mod source;

pub use entities::*;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Member store is unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the member store, keyed by phone number.
pub trait MemberFinder: Send + Sync {
    /// Returns the first member registered with exactly `phone_number`.
    /// No match is `Ok(None)`, never an error.
    fn find_by_phone(&self, phone_number: &str) -> Result<Option<Member>, Error>;
}

type PhoneToIndexes = HashMap<Arc<str>, Box<[u32]>>;

/// In-memory member store.
///
/// Phone numbers are not unique. Every index for a number is kept in
/// registration order and lookups return the earliest one.
#[derive(Debug, Clone, Default)]
pub struct MemberRepository {
    pub members: Box<[Member]>,
    phone_lookup: Arc<PhoneToIndexes>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_members<I>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = Member>,
    {
        let mut all: Vec<Member> = std::mem::take(&mut self.members).into_vec();
        all.extend(members);

        let mut phone_lookup: HashMap<Arc<str>, Vec<u32>> = HashMap::new();
        for (i, member) in all.iter_mut().enumerate() {
            member.index = i as u32;
            phone_lookup
                .entry(member.phone_number.clone())
                .or_default()
                .push(member.index);
        }

        for (phone, indexes) in phone_lookup.iter().filter(|(_, value)| value.len() > 1) {
            warn!(
                "Phone number {phone} is shared by {} members, lookups resolve to member {}",
                indexes.len(),
                all[indexes[0] as usize].id
            );
        }

        self.members = all.into();
        self.phone_lookup = Arc::new(
            phone_lookup
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        );
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member_by_phone(&self, phone_number: &str) -> Option<&Member> {
        self.phone_lookup
            .get(phone_number)
            .and_then(|indexes| indexes.first())
            .map(|i| &self.members[*i as usize])
    }

    /// Every member registered with `phone_number`, in registration order.
    pub fn members_by_phone(&self, phone_number: &str) -> Vec<&Member> {
        self.phone_lookup
            .get(phone_number)
            .map(|indexes| {
                indexes
                    .iter()
                    .map(|i| &self.members[*i as usize])
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl MemberFinder for MemberRepository {
    fn find_by_phone(&self, phone_number: &str) -> Result<Option<Member>, Error> {
        let member = self.member_by_phone(phone_number).cloned();
        debug!(found = member.is_some(), "Member lookup by phone");
        Ok(member)
    }
}
