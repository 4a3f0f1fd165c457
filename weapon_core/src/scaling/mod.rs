//! Scaling engine - scaled damage per type and the aggregate rating
//!
//! Damage uses threshold-relative scaling: only attribute points above 10
//! contribute. The rating is normalized against a fixed reference weapon so
//! that values compare across weapons and levels.

mod damage;
mod rating;

pub use damage::{attribute_bonus, damage_multiplier, level_bonus, scaled_damage, scaled_damages};
pub use rating::{
    attribute_rating, best, by_rating, combine_ratings, damage_per_stamina, level_rating,
    rating_value, raw_value, reference_value, sort_by_rating, worst, Rating, RatingOp,
};
