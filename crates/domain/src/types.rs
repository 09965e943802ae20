// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use time::OffsetDateTime;

/// The largest quantity a single line item may carry.
pub const MAX_QUANTITY: u32 = 99_999;

/// The longest comment, in characters, a line item may carry.
pub const MAX_COMMENT_CHARS: usize = 500;

/// Line items grouped by category, in first-insertion order.
pub type ItemsByCategory = IndexMap<String, Vec<OrderLineItem>>;

/// Identifies a catalog position: a category and a row index within it.
///
/// The wire form is `"<category>-<index>"`. Parsing splits at the last `-`,
/// so category names may contain dashes themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineItemKey {
    /// The category name.
    category: String,
    /// The zero-based row index within the category.
    index: usize,
}

impl LineItemKey {
    /// Creates a new `LineItemKey`.
    ///
    /// # Arguments
    ///
    /// * `category` - The category name
    /// * `index` - The zero-based row index within the category
    #[must_use]
    pub fn new(category: &str, index: usize) -> Self {
        Self {
            category: category.to_string(),
            index,
        }
    }

    /// Returns the category name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the row index within the category.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Parses a key from its `"<category>-<index>"` wire form.
    ///
    /// # Errors
    ///
    /// Returns an error if the id has no `-` separator, an empty category,
    /// or a non-numeric index.
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        let (category, index) = id
            .rsplit_once('-')
            .ok_or_else(|| DomainError::InvalidLineItemId(id.to_string()))?;

        if category.is_empty() {
            return Err(DomainError::InvalidLineItemId(id.to_string()));
        }

        let index: usize = index
            .parse()
            .map_err(|_| DomainError::InvalidLineItemId(id.to_string()))?;

        Ok(Self::new(category, index))
    }
}

impl std::fmt::Display for LineItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.category, self.index)
    }
}

impl FromStr for LineItemKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for LineItemKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LineItemKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// The line item fields a customer may edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemField {
    /// Ordered quantity.
    Quantity,
    /// Free-text comment from the chef.
    ChefComment,
    /// Free-text comment from the shopper.
    ShopperComment,
}

impl ItemField {
    /// Returns the wire name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quantity => "quantity",
            Self::ChefComment => "chefComment",
            Self::ShopperComment => "shopperComment",
        }
    }
}

impl FromStr for ItemField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quantity" => Ok(Self::Quantity),
            "chefComment" => Ok(Self::ChefComment),
            "shopperComment" => Ok(Self::ShopperComment),
            _ => Err(DomainError::UnknownItemField(s.to_string())),
        }
    }
}

impl std::fmt::Display for ItemField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single-field patch to a line item, typed per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemUpdate {
    /// Replace the quantity.
    Quantity(u32),
    /// Replace the chef comment.
    ChefComment(String),
    /// Replace the shopper comment.
    ShopperComment(String),
}

impl ItemUpdate {
    /// Returns the field this update targets.
    #[must_use]
    pub const fn field(&self) -> ItemField {
        match self {
            Self::Quantity(_) => ItemField::Quantity,
            Self::ChefComment(_) => ItemField::ChefComment,
            Self::ShopperComment(_) => ItemField::ShopperComment,
        }
    }
}

/// A read-only row of the product catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRow {
    /// The category (or sub-category heading) the row belongs to.
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    /// The warehouse bin code.
    #[serde(default, deserialize_with = "lenient_text")]
    pub bin_code: String,
    /// The product description.
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    /// The packaging details.
    #[serde(default, deserialize_with = "lenient_text")]
    pub packaging: String,
}

impl CatalogRow {
    /// Creates a new `CatalogRow`.
    #[must_use]
    pub fn new(category: &str, bin_code: &str, description: &str, packaging: &str) -> Self {
        Self {
            category: category.to_string(),
            bin_code: bin_code.to_string(),
            description: description.to_string(),
            packaging: packaging.to_string(),
        }
    }
}

/// Spreadsheet-derived cells may arrive as numbers or `null`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientCell {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let cell: Option<LenientCell> = Option::deserialize(deserializer)?;
    Ok(match cell {
        None => String::new(),
        Some(LenientCell::Text(text)) => text,
        Some(LenientCell::Integer(value)) => value.to_string(),
        Some(LenientCell::Float(value)) => value.to_string(),
        Some(LenientCell::Flag(value)) => value.to_string(),
    })
}

/// A mutable order line owned by the order store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// The catalog position this line refers to.
    pub id: LineItemKey,
    /// The category the line is filed under.
    pub category: String,
    /// The product description.
    pub description: String,
    /// The packaging details.
    pub packaging: String,
    /// The ordered quantity.
    pub quantity: u32,
    /// Optional comment from the chef.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chef_comment: Option<String>,
    /// Optional comment from the shopper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopper_comment: Option<String>,
    /// The warehouse bin code, once synced from the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_code: Option<String>,
}

impl OrderLineItem {
    /// Creates a partial line for a position that has no line yet.
    ///
    /// Description and packaging are empty and the quantity is zero.
    #[must_use]
    pub fn partial(id: LineItemKey) -> Self {
        Self {
            category: id.category().to_string(),
            id,
            description: String::new(),
            packaging: String::new(),
            quantity: 0,
            chef_comment: None,
            shopper_comment: None,
            bin_code: None,
        }
    }

    /// Replaces the single field named by `update`, leaving the rest intact.
    pub fn apply_update(&mut self, update: ItemUpdate) {
        match update {
            ItemUpdate::Quantity(quantity) => self.quantity = quantity,
            ItemUpdate::ChefComment(comment) => self.chef_comment = Some(comment),
            ItemUpdate::ShopperComment(comment) => self.shopper_comment = Some(comment),
        }
    }

    /// Copies bin code, description and packaging from a catalog row.
    pub fn sync_from_catalog(&mut self, row: &CatalogRow) {
        self.bin_code = Some(row.bin_code.clone());
        self.description.clone_from(&row.description);
        self.packaging.clone_from(&row.packaging);
    }

    /// Returns the chef comment, or an empty string.
    #[must_use]
    pub fn chef_comment_or_empty(&self) -> &str {
        self.chef_comment.as_deref().unwrap_or_default()
    }

    /// Returns the shopper comment, or an empty string.
    #[must_use]
    pub fn shopper_comment_or_empty(&self) -> &str {
        self.shopper_comment.as_deref().unwrap_or_default()
    }

    /// Returns the bin code, or an empty string.
    #[must_use]
    pub fn bin_code_or_empty(&self) -> &str {
        self.bin_code.as_deref().unwrap_or_default()
    }
}

/// An order session number: `"ORD"` followed by a Unix millisecond timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Prefix shared by every minted order number.
    pub const PREFIX: &'static str = "ORD";

    /// Builds an order number from a millisecond timestamp.
    #[must_use]
    pub fn from_millis(millis: u128) -> Self {
        Self(format!("{}{millis}", Self::PREFIX))
    }

    /// Mints a new order number for `now`.
    ///
    /// The result is strictly greater than `previous` when `previous` was
    /// itself minted, so two sessions never share a number even when they
    /// start within the same millisecond.
    #[must_use]
    pub fn mint(now: OffsetDateTime, previous: Option<&Self>) -> Self {
        let now_millis: u128 = u128::try_from(now.unix_timestamp_nanos() / 1_000_000).unwrap_or(0);
        let floor: u128 = previous
            .and_then(Self::millis)
            .map_or(0, |millis| millis.saturating_add(1));
        Self::from_millis(now_millis.max(floor))
    }

    /// Returns the order number text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the embedded millisecond timestamp, if this number was minted.
    #[must_use]
    pub fn millis(&self) -> Option<u128> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The customer details field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerField {
    /// Customer name.
    Name,
    /// Contact email.
    Email,
    /// Contact phone.
    Phone,
    /// Name of the vessel being provisioned.
    BoatName,
    /// Requested order date.
    OrderDate,
    /// Latest delivery date.
    DeliverBy,
    /// Customer-chosen order label.
    OrderName,
    /// The session order number.
    OrderNumber,
}

impl CustomerField {
    /// Every customer field, in form order.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::BoatName,
        Self::OrderDate,
        Self::DeliverBy,
        Self::OrderName,
        Self::OrderNumber,
    ];

    /// Returns the wire name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::BoatName => "boatName",
            Self::OrderDate => "orderDate",
            Self::DeliverBy => "deliverBy",
            Self::OrderName => "orderName",
            Self::OrderNumber => "orderNumber",
        }
    }

    /// Returns the human-readable label of this field.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::BoatName => "Boat Name",
            Self::OrderDate => "Order Date",
            Self::DeliverBy => "Deliver By",
            Self::OrderName => "Order Name",
            Self::OrderNumber => "Order Number",
        }
    }
}

impl FromStr for CustomerField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCustomerField(s.to_string()))
    }
}

/// Contact and delivery details for one order session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    /// Customer name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Name of the vessel being provisioned.
    pub boat_name: String,
    /// Requested order date.
    pub order_date: String,
    /// Latest delivery date.
    pub deliver_by: String,
    /// Customer-chosen order label.
    pub order_name: String,
    /// The session order number.
    pub order_number: OrderNumber,
}

impl CustomerDetails {
    /// Creates blank customer details for a new session.
    #[must_use]
    pub const fn fresh(order_number: OrderNumber) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            boat_name: String::new(),
            order_date: String::new(),
            deliver_by: String::new(),
            order_name: String::new(),
            order_number,
        }
    }

    /// Returns the value of a single field.
    #[must_use]
    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Name => &self.name,
            CustomerField::Email => &self.email,
            CustomerField::Phone => &self.phone,
            CustomerField::BoatName => &self.boat_name,
            CustomerField::OrderDate => &self.order_date,
            CustomerField::DeliverBy => &self.deliver_by,
            CustomerField::OrderName => &self.order_name,
            CustomerField::OrderNumber => self.order_number.value(),
        }
    }

    /// Replaces a single field, leaving the rest intact.
    pub fn set(&mut self, field: CustomerField, value: String) {
        match field {
            CustomerField::Name => self.name = value,
            CustomerField::Email => self.email = value,
            CustomerField::Phone => self.phone = value,
            CustomerField::BoatName => self.boat_name = value,
            CustomerField::OrderDate => self.order_date = value,
            CustomerField::DeliverBy => self.deliver_by = value,
            CustomerField::OrderName => self.order_name = value,
            CustomerField::OrderNumber => self.order_number = OrderNumber(value),
        }
    }
}
