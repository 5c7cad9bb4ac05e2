use serde::{Deserialize, Serialize};

use super::Error;

/// A single address-book entry. `firstname` and `name` are required on
/// create and update; every other field defaults to an empty string when
/// absent from a request body. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub street_nr: String,
    #[serde(default)]
    pub plz: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub internet: String,
}

impl AddressRecord {
    /// The map key an entry is created under. Updates never recompute
    /// this; an entry renamed via PUT keeps the key it was created with.
    pub fn key(&self) -> String {
        format!("{} {}", self.firstname, self.name)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.firstname.is_empty() {
            return Err(Error::MissingField("firstname"));
        }
        if self.name.is_empty() {
            return Err(Error::MissingField("name"));
        }
        Ok(())
    }
}
