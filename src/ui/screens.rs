use anyhow::Result;

use crate::database::Database;
use crate::db::Store;
use crate::models::{Customer, Restaurant, Review};

/// Selection inside a list of `len` rows, clamped to the ends.
#[derive(Default, Clone, Copy)]
pub(crate) struct Cursor {
    pub(crate) selected: usize,
}

impl Cursor {
    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let last = len as isize - 1;
        self.selected = (self.selected as isize + offset).clamp(0, last) as usize;
    }

    pub(crate) fn ensure_in_bounds(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// Right-hand pane of the restaurants screen.
#[derive(Default)]
pub(crate) struct RestaurantDetail {
    pub(crate) reviews: Vec<String>,
    pub(crate) reviewers: Vec<Customer>,
}

impl RestaurantDetail {
    pub(crate) fn load<S: Store>(
        db: &Database<S>,
        restaurant: Option<&Restaurant>,
    ) -> Result<Self> {
        let Some(restaurant) = restaurant else {
            return Ok(Self::default());
        };
        Ok(Self {
            reviews: db.all_reviews(restaurant.id)?,
            reviewers: db.customers_for(restaurant.id)?,
        })
    }
}

/// Right-hand pane of the customers screen: the distinct restaurants the
/// customer reviewed, each with that customer's reviews of it.
#[derive(Default)]
pub(crate) struct CustomerDetail {
    pub(crate) favorite: Option<Restaurant>,
    pub(crate) restaurants: Vec<(Restaurant, Vec<Review>)>,
    pub(crate) cursor: Cursor,
}

impl CustomerDetail {
    pub(crate) fn load<S: Store>(db: &Database<S>, customer: Option<&Customer>) -> Result<Self> {
        let Some(customer) = customer else {
            return Ok(Self::default());
        };
        let reviews = db.reviews_by_customer(customer.id)?;
        let restaurants = db
            .restaurants_for(customer.id)?
            .into_iter()
            .map(|restaurant| {
                let own: Vec<Review> = reviews
                    .iter()
                    .filter(|review| review.restaurant_id == restaurant.id)
                    .cloned()
                    .collect();
                (restaurant, own)
            })
            .collect();
        Ok(Self {
            favorite: db.favorite_restaurant(customer.id)?,
            restaurants,
            cursor: Cursor::default(),
        })
    }

    pub(crate) fn current(&self) -> Option<&(Restaurant, Vec<Review>)> {
        self.restaurants.get(self.cursor.selected)
    }
}
