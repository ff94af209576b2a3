use carming::member::{Gender, Member, MemberFinder, MemberRepository, source::MemberSource};
use chrono::NaiveDate;

fn members_csv() -> MemberSource {
    let path = format!("{}/tests/data/members.csv", env!("CARGO_MANIFEST_DIR"));
    MemberSource::from_csv(path.into())
}

#[test]
fn find_by_phone_absent_test() {
    let repo = MemberRepository::new().with_members([Member::new(1, "Kim Minji", "010-1234-5678")]);
    assert_eq!(repo.find_by_phone("010-0000-0000").unwrap(), None);
    assert_eq!(MemberRepository::new().find_by_phone("").unwrap(), None);
}

#[test]
fn find_by_phone_single_test() {
    let member = Member::new(7, "Lee Junho", "010-2222-3333")
        .with_nickname("jun")
        .with_gender(Gender::Male)
        .with_birth_date(NaiveDate::from_ymd_opt(1988, 11, 2).unwrap());
    let repo = MemberRepository::new().with_members([member.clone()]);

    let found = repo.find_by_phone("010-2222-3333").unwrap().unwrap();
    assert_eq!(found, member);
}

#[test]
fn find_by_phone_is_exact_match_test() {
    let repo = MemberRepository::new().with_members([Member::new(1, "Kim Minji", "010-1234-5678")]);
    assert!(repo.find_by_phone("01012345678").unwrap().is_none());
    assert!(repo.find_by_phone(" 010-1234-5678").unwrap().is_none());
}

#[test]
fn duplicate_phone_resolves_to_first_registered_test() {
    let repo = MemberRepository::new()
        .with_members([
            Member::new(10, "First", "010-1111-1111"),
            Member::new(11, "Other", "010-2222-2222"),
        ])
        .with_members([Member::new(12, "Second", "010-1111-1111")]);

    assert_eq!(repo.find_by_phone("010-1111-1111").unwrap().unwrap().id, 10);
    let all: Vec<u64> = repo
        .members_by_phone("010-1111-1111")
        .into_iter()
        .map(|member| member.id)
        .collect();
    assert_eq!(all, vec![10, 12]);
}

#[test]
fn load_csv_test() {
    let repo = MemberRepository::new().load_source(&members_csv()).unwrap();
    // Unknown gender and non numeric id rows are skipped.
    assert_eq!(repo.len(), 4);

    let junho = repo.member_by_phone("010-2222-3333").unwrap();
    assert_eq!(junho.gender, Some(Gender::Male));
    assert_eq!(&*junho.nickname, "Lee Junho");
    assert_eq!(junho.birth_date, NaiveDate::from_ymd_opt(1988, 11, 2));

    let minji = repo.member_by_phone("010-1234-5678").unwrap();
    assert_eq!(minji.id, 1);
    assert_eq!(minji.gender, Some(Gender::Female));

    let hobi = repo.member_by_phone("01055556666").unwrap();
    assert_eq!(hobi.gender, None);
    assert!(repo.member_by_phone("010-9999-0000").is_none());
}

#[test]
fn load_missing_csv_test() {
    let source = MemberSource::from_csv("does/not/exist.csv".into());
    assert!(MemberRepository::new().load_source(&source).is_err());
}

#[test]
fn gender_parse_test() {
    assert_eq!("mail".parse::<Gender>(), Ok(Gender::Male));
    assert_eq!("FEMALE".parse::<Gender>(), Ok(Gender::Female));
    assert!("other".parse::<Gender>().is_err());
}
