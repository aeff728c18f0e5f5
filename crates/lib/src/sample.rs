//! Example payloads used by the `seed` command and the docs.
//!
//! The store itself is payload-agnostic; nothing here is required to use it.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Collection the sample records are written to by default.
pub const USERS: &str = "users";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
  pub city: String,
  pub state: String,
  pub country: String,
  pub pincode: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
  pub name: String,
  pub age: Number,
  pub contact: String,
  pub company: String,
  pub address: Address,
}

impl User {
  fn new(name: &str, age: u32, contact: &str, company: &str, address: Address) -> Self {
    Self {
      name: name.to_string(),
      age: Number::from(age),
      contact: contact.to_string(),
      company: company.to_string(),
      address,
    }
  }
}

impl Address {
  fn new(city: &str, state: &str, country: &str, pincode: u32) -> Self {
    Self {
      city: city.to_string(),
      state: state.to_string(),
      country: country.to_string(),
      pincode: Number::from(pincode),
    }
  }
}

/// The seed data set. Each user is stored under its `name`.
pub fn employees() -> Vec<User> {
  vec![
    User::new(
      "John",
      23,
      "23344333",
      "Myrl Tech",
      Address::new("bangalore", "karnataka", "india", 410013),
    ),
    User::new(
      "Paul",
      25,
      "23344333",
      "Google",
      Address::new("san francisco", "california", "USA", 410013),
    ),
    User::new(
      "Robert",
      27,
      "23344333",
      "Microsoft",
      Address::new("bangalore", "karnataka", "india", 410013),
    ),
    User::new(
      "Vince",
      29,
      "23344333",
      "Facebook",
      Address::new("bangalore", "karnataka", "india", 410013),
    ),
    User::new(
      "Neo",
      31,
      "23344333",
      "Remote-Teams",
      Address::new("bangalore", "karnataka", "india", 410013),
    ),
    User::new(
      "Zhora",
      33,
      "23344333",
      "Dominate",
      Address::new("moscow", "moscow", "russia", 101000),
    ),
  ]
}
