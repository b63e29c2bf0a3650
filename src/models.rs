//! Domain models for restaurants, customers and the reviews that link them.
//! Reviews are the associative rows of the customer/restaurant relationship:
//! they only store the ids of both endpoints and the store resolves them, so
//! no model ever holds a reference to another model.

use std::fmt;

/// Longest feedback text a review may carry, counted in characters.
pub const MAX_FEEDBACK_LEN: usize = 250;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub i64);

        impl $name {
            /// Raw integer value, as stored in the backing table.
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Primary key of a [`Restaurant`].
    RestaurantId
);
entity_id!(
    /// Primary key of a [`Customer`].
    CustomerId
);
entity_id!(
    /// Primary key of a [`Review`].
    ReviewId
);

/// The three entity collections held by a store. Used to label lookups in
/// errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Restaurant,
    Customer,
    Review,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Restaurant => "restaurant",
            EntityKind::Customer => "customer",
            EntityKind::Review => "review",
        };
        f.write_str(name)
    }
}

/// Highest price tier that [`Restaurant::price_label`] spells out sign by sign.
pub const PRICE_SIGNS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A place that can be reviewed. `price` is a tier (1 = cheap) rather than a
/// currency amount.
pub struct Restaurant {
    /// Assigned by the store on insert and never reused.
    pub id: RestaurantId,
    /// Display name shown in reviews and lists.
    pub name: String,
    /// Price tier. Any integer is accepted and compared numerically when
    /// looking for the fanciest restaurant.
    pub price: i64,
}

impl Restaurant {
    /// Price tier rendered as dollar signs, e.g. `$$$` for tier 3. Tiers past
    /// [`PRICE_SIGNS`] are written as a count instead, `$×12`.
    pub fn price_label(&self) -> String {
        match self.price {
            price if price <= 0 => "-".to_string(),
            price if price <= PRICE_SIGNS => "$".repeat(price as usize),
            price => format!("$×{price}"),
        }
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Someone who writes reviews.
pub struct Customer {
    /// Assigned by the store on insert and never reused.
    pub id: CustomerId,
    /// Given name, printed first by [`Customer::full_name`].
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl Customer {
    /// `"{first} {last}"`. Blank parts stay blank rather than being dropped,
    /// so the separator is always present.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A customer's rating of a restaurant. The ids are resolved through the
/// store whenever the endpoints are needed.
pub struct Review {
    /// Assigned by the store on insert. Ids of deleted reviews stay retired.
    pub id: ReviewId,
    /// Rating as entered. Not range-checked; the browser draws it on a
    /// five-star bar.
    pub star_rating: i64,
    /// Free text, non-empty and at most [`MAX_FEEDBACK_LEN`] characters.
    pub feedback: String,
    /// Author of the review.
    pub customer_id: CustomerId,
    /// Restaurant being reviewed.
    pub restaurant_id: RestaurantId,
}

/// Payload for creating a restaurant; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRestaurant {
    pub name: String,
    pub price: i64,
}

/// Payload for creating a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
}

/// Payload for creating a review. Stores insert it as given; the mutation
/// layer is what validates the fields and resolves both ids first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub star_rating: i64,
    pub feedback: String,
}

impl NewRestaurant {
    pub(crate) fn into_restaurant(self, id: RestaurantId) -> Restaurant {
        Restaurant {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

impl NewCustomer {
    pub(crate) fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

impl NewReview {
    pub(crate) fn into_review(self, id: ReviewId) -> Review {
        Review {
            id,
            star_rating: self.star_rating,
            feedback: self.feedback,
            customer_id: self.customer_id,
            restaurant_id: self.restaurant_id,
        }
    }
}
