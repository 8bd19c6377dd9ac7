use std::collections::{HashMap, BTreeMap};

use chrono::{DateTime, TimeZone, Utc};
use url::Url;
use serde_json::json;

use json_assign_traits::{Value, Error, FromJson, assign, from_value, from_document};
use json_assign_derive::{Deserializable, RawRepresentable};

fn init_logging() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, RawRepresentable)]
enum Color {
  Red = 1,
  Blue = 2,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, RawRepresentable)]
enum Status {
  #[default]
  Active,
  #[raw("on-hold")]
  OnHold,
  Closed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, RawRepresentable)]
#[raw_type(u8)]
enum Priority {
  #[raw(0)]
  Low,
  #[raw(5)]
  High,
}

#[derive(Clone, PartialEq, Debug, Default, Deserializable)]
struct Person {
  name: String,
  age: i64,
}

fn shout(value: &Value) -> Option<String> {
  value.as_str().map(str::to_uppercase)
}

#[derive(Clone, PartialEq, Debug, Default, Deserializable)]
pub struct Account {
  pub id: u64,
  #[key("display_name")]
  pub(crate) name: String,
  pub(in crate) owner: Option<Person>,
  members: Vec<Person>,
  scores: HashMap<u32, f64>,
  roles: BTreeMap<String, Person>,
  favorite: Option<Color>,
  status: Status,
  priority: Option<Priority>,
  homepage: Option<Url>,
  created: Option<DateTime<Utc>>,
  #[format("%Y-%m-%d")]
  birthday: Option<DateTime<Utc>>,
  #[format("%d/%m/%Y %H:%M")]
  updated: DateTime<Utc>,
  #[converter(shout)]
  motto: String,
  #[converter(crate::shout)]
  nickname: Option<String>,
  #[skip]
  cache: Option<u64>,
  r#type: String,
}

#[derive(PartialEq, Debug, Default, Deserializable)]
struct Node {
  label: String,
  children: Vec<Node>,
  next: Option<Box<Node>>,
}

#[derive(PartialEq, Debug, Default, Deserializable)]
struct Page<T: Default + FromJson> {
  items: Vec<T>,
  total: u32,
}

#[derive(PartialEq, Debug, Default, Deserializable)]
struct Empty {}

#[test]
fn composite_is_total() {
  init_logging();

  assert_eq!(
    from_value::<Person>(&json!({ "name": "Ann" })).unwrap(),
    Some(Person { name: "Ann".to_string(), age: 0 })
  );
  assert_eq!(
    from_value::<Person>(&json!({ "name": null, "age": "x", "unknown": [1] })).unwrap(),
    Some(Person::default())
  );
  assert_eq!(from_value::<Person>(&json!([])).unwrap(), None);
  assert_eq!(from_value::<Empty>(&json!({ "a": 1 })).unwrap(), Some(Empty {}));
}

#[test]
fn enums() {
  assert_eq!(from_value::<Color>(&json!(1)).unwrap(), Some(Color::Red));
  assert_eq!(from_value::<Color>(&json!("2")).unwrap(), Some(Color::Blue));
  assert_eq!(from_value::<Color>(&json!(3)).unwrap(), None);

  assert_eq!(from_value::<Status>(&json!("Active")).unwrap(), Some(Status::Active));
  assert_eq!(from_value::<Status>(&json!("on-hold")).unwrap(), Some(Status::OnHold));
  assert_eq!(from_value::<Status>(&json!("OnHold")).unwrap(), None);
  assert_eq!(from_value::<Status>(&json!(0)).unwrap(), None);

  assert_eq!(from_value::<Priority>(&json!(5)).unwrap(), Some(Priority::High));
  assert_eq!(from_value::<Priority>(&json!(256)).unwrap(), None);

  let mut status = Status::Closed;
  assign(&mut status, Some(&json!("unknown"))).unwrap();
  assert_eq!(status, Status::Closed);
}

#[test]
fn account() {
  init_logging();

  let account = from_document::<Account>(
    r#"{
      "id": "17",
      "display_name": "Team",
      "owner": { "name": "Ann", "age": 41 },
      "members": [{ "name": "Bob" }, 7, { "age": 30 }],
      "scores": { "1": 0.5, "two": 1.0, "3": "x", "4": 2 },
      "roles": { "admin": { "name": "Ann" }, "guest": null },
      "favorite": 2,
      "status": "Closed",
      "priority": 1,
      "homepage": "https://example.com/team",
      "created": 1433116800,
      "birthday": "1990-04-12",
      "updated": "01/06/2015 12:30",
      "motto": "move fast",
      "nickname": 5,
      "cache": 10,
      "type": "team"
    }"#,
  )
  .unwrap()
  .unwrap();

  assert_eq!(account.id, 17);
  assert_eq!(account.name, "Team");
  assert_eq!(account.owner, Some(Person { name: "Ann".to_string(), age: 41 }));
  assert_eq!(account.members, [
    Person { name: "Bob".to_string(), age: 0 },
    Person { name: String::new(), age: 30 },
  ]);
  assert_eq!(account.scores, HashMap::from([(1, 0.5), (4, 2.0)]));
  assert_eq!(
    account.roles,
    BTreeMap::from([("admin".to_string(), Person { name: "Ann".to_string(), age: 0 })])
  );
  assert_eq!(account.favorite, Some(Color::Blue));
  assert_eq!(account.status, Status::Closed);
  assert_eq!(account.priority, None);
  assert_eq!(account.homepage, Some(Url::parse("https://example.com/team").unwrap()));
  assert_eq!(account.created, Some(Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap()));
  assert_eq!(account.birthday, Some(Utc.with_ymd_and_hms(1990, 4, 12, 0, 0, 0).unwrap()));
  assert_eq!(account.updated, Utc.with_ymd_and_hms(2015, 6, 1, 12, 30, 0).unwrap());
  assert_eq!(account.motto, "MOVE FAST");
  assert_eq!(account.nickname, None);
  assert_eq!(account.cache, None);
  assert_eq!(account.r#type, "team");
}

#[test]
fn reassignment() {
  let mut account = Account {
    id: 42,
    status: Status::OnHold,
    updated: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
    members: vec![Person::default()],
    favorite: Some(Color::Red),
    ..Default::default()
  };

  // Required targets retain their values when the value is absent or can't be converted
  let mut id = account.id;
  assign(&mut id, Some(&json!("forty-two"))).unwrap();
  assign(&mut id, Some(&Value::Null)).unwrap();
  assign(&mut id, None).unwrap();
  assert_eq!(id, 42);

  // Assigning a composite constructs a new instance, from its `Default`
  let fields = json!({ "status": "bogus", "updated": "yesterday", "members": "none", "favorite": 9 });
  let mut updated = account.clone();
  assign(&mut updated, Some(&fields)).unwrap();
  assert_eq!(updated.status, Status::Active);
  assert!(updated.members.is_empty());
  assert_eq!(updated.favorite, None);

  // While assigning its fields individually retains their values
  let fields = fields.as_object().unwrap();
  assign(&mut account.status, fields.get("status")).unwrap();
  assert_eq!(account.status, Status::OnHold);
  json_assign_traits::assign_with(
    &mut account.updated,
    fields.get("updated"),
    json_assign_traits::date_format("%Y"),
  );
  assert_eq!(account.updated, Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
  assign(&mut account.members, fields.get("members")).unwrap();
  assert_eq!(account.members, [Person::default()]);
  assign(&mut account.favorite, fields.get("favorite")).unwrap();
  assert_eq!(account.favorite, None);
}

#[test]
fn recursive() {
  let node = from_value::<Node>(&json!({
    "label": "root",
    "children": [{ "label": "a", "children": [{ "label": "b" }] }, 3],
    "next": { "label": "sibling", "next": null }
  }))
  .unwrap()
  .unwrap();

  assert_eq!(node, Node {
    label: "root".to_string(),
    children: vec![Node {
      label: "a".to_string(),
      children: vec![Node { label: "b".to_string(), ..Default::default() }],
      next: None,
    }],
    next: Some(Box::new(Node { label: "sibling".to_string(), ..Default::default() })),
  });
}

#[test]
fn generic() {
  assert_eq!(
    from_value::<Page<Status>>(&json!({ "items": ["Active", "Closed", "x", "on-hold"], "total": 4 }))
      .unwrap(),
    Some(Page { items: vec![Status::Active, Status::Closed, Status::OnHold], total: 4 })
  );
  assert_eq!(
    from_value::<Page<Person>>(&json!({ "items": [{ "name": "Ann" }] })).unwrap(),
    Some(Page { items: vec![Person { name: "Ann".to_string(), age: 0 }], total: 0 })
  );
}

#[test]
fn embedded_documents() {
  init_logging();

  assert_eq!(
    from_value::<Page<Person>>(&json!({ "items": r#"[{ "name": "Ann" }, { "age": 3 }]"# }))
      .unwrap(),
    Some(Page {
      items: vec![
        Person { name: "Ann".to_string(), age: 0 },
        Person { name: String::new(), age: 3 }
      ],
      total: 0
    })
  );
  assert_eq!(
    from_value::<Account>(&json!({ "owner": r#"{ "name": "Ann" }"# })).unwrap().unwrap().owner,
    Some(Person { name: "Ann".to_string(), age: 0 })
  );
  assert_eq!(
    from_value::<Person>(&json!(r#"{ "name": "Ann", "age": 5 }"#)).unwrap(),
    Some(Person { name: "Ann".to_string(), age: 5 })
  );

  // Malformed embedded documents error, even when nested
  assert!(matches!(
    from_value::<Account>(&json!({ "owner": "{ \"name\": " })),
    Err(Error::EmbeddedDocument(_))
  ));
  assert!(matches!(
    from_value::<Node>(&json!({ "children": [{ "next": "[" }] })),
    Err(Error::EmbeddedDocument(_))
  ));

  let mut owner = Some(Person::default());
  assert!(assign(&mut owner, Some(&json!("}"))).is_err());
  assert_eq!(owner, Some(Person::default()));
}
