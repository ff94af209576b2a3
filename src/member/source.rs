use std::{fs::File, path::PathBuf, time::Instant};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::member::{Error, Gender, Member, MemberRepository};

const BIRTH_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// One row of a member export.
#[derive(Deserialize, Debug, Clone)]
pub struct MemberRecord {
    pub id: u64,
    pub name: String,
    pub nickname: Option<String>,
    pub phone_number: String,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
}

impl TryFrom<MemberRecord> for Member {
    type Error = String;

    fn try_from(value: MemberRecord) -> Result<Self, Self::Error> {
        let gender = value
            .gender
            .as_deref()
            .map(str::parse::<Gender>)
            .transpose()?;
        let birth_date = value
            .birth_date
            .as_deref()
            .map(parse_birth_date)
            .transpose()?;
        Ok(Self {
            index: 0,
            id: value.id,
            nickname: value.nickname.as_deref().unwrap_or(&value.name).into(),
            name: value.name.into(),
            phone_number: value.phone_number.into(),
            gender,
            birth_date,
        })
    }
}

fn parse_birth_date(value: &str) -> Result<NaiveDate, String> {
    BIRTH_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value.trim(), format).ok())
        .ok_or_else(|| format!("invalid birth date `{value}`"))
}

/// A CSV file of member rows with a header line.
pub struct MemberSource {
    path: PathBuf,
}

impl MemberSource {
    pub fn from_csv(path: PathBuf) -> Self {
        Self { path }
    }

    /// Streams every well formed row. Rows that fail to parse are skipped.
    pub fn stream_members<F>(&self, mut f: F) -> Result<(), Error>
    where
        F: FnMut(Member),
    {
        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(file);
        for (line, record) in reader.deserialize::<MemberRecord>().enumerate() {
            // Header is line 1.
            let line = line + 2;
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    warn!("Skipping member row {line}: {err}");
                    continue;
                }
            };
            match Member::try_from(record) {
                Ok(member) => f(member),
                Err(err) => warn!("Skipping member row {line}: {err}"),
            }
        }
        Ok(())
    }
}

impl MemberRepository {
    pub fn load_source(self, source: &MemberSource) -> Result<Self, Error> {
        debug!("Loading members from {:?}...", source.path);
        let now = Instant::now();
        let mut members: Vec<Member> = Vec::new();
        source.stream_members(|member| members.push(member))?;
        let repository = self.with_members(members);
        debug!(
            "Loading {} members took {:?}",
            repository.len(),
            now.elapsed()
        );
        Ok(repository)
    }
}
