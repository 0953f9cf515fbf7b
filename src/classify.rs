use std::error::Error as StdError;

use crate::category::Category;
use crate::error::Error;
use crate::field::FieldError;

/// Iterates `err` and every error reachable through `source()`, outermost first.
pub fn chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |e| (*e).source())
}

fn carried_category(err: &(dyn StdError + 'static)) -> Option<Category> {
    if let Some(category) = err.downcast_ref::<Category>() {
        return Some(*category);
    }
    if let Some(field_error) = err.downcast_ref::<FieldError>() {
        return Some(field_error.category());
    }
    err.downcast_ref::<Error>().map(Error::category)
}

/// Every distinct category carried anywhere in the chain, outermost first.
pub fn categories(err: &(dyn StdError + 'static)) -> Vec<Category> {
    let mut found = Vec::new();
    for category in chain(err).filter_map(carried_category) {
        if !found.contains(&category) {
            found.push(category);
        }
    }
    found
}

/// True when any link of the chain carries `category` or one of its
/// descendants. `None` is never in any category.
pub fn is_category(err: Option<&(dyn StdError + 'static)>, category: Category) -> bool {
    err.is_some_and(|err| {
        chain(err)
            .filter_map(carried_category)
            .any(|carried| carried.is_a(category))
    })
}

/// The most specific category in the chain. On equal depth the outermost
/// link wins.
pub fn classify(err: &(dyn StdError + 'static)) -> Option<Category> {
    chain(err)
        .filter_map(carried_category)
        .fold(None, |best: Option<Category>, carried| match best {
            Some(b) if b.depth() >= carried.depth() => Some(b),
            _ => Some(carried),
        })
}

pub fn is_validation_error(err: &(dyn StdError + 'static)) -> bool {
    is_category(Some(err), Category::Validation)
}

pub fn is_bad_request_error(err: &(dyn StdError + 'static)) -> bool {
    is_category(Some(err), Category::BadRequest)
}

pub fn is_bad_record_error(err: &(dyn StdError + 'static)) -> bool {
    is_category(Some(err), Category::BadRecord)
}

/// True for a bad value of either a request field or a record field.
pub fn is_bad_field_value_error(err: &(dyn StdError + 'static)) -> bool {
    chain(err)
        .filter_map(carried_category)
        .any(Category::is_field_value)
}
