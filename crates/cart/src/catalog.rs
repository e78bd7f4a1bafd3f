//! Product cards on a listing page.
//!
//! A [`ProductCard`] is what the listing markup exposes about one product:
//! an optional `data-id`, a title, the price label as displayed and an
//! image source. [`ProductCard::to_candidate`] turns it into a
//! [`ProductCandidate`] the cart store can accept.

use rand::Rng;
use thiserror::Error;
use vitrine_core::{Price, ProductCandidate, ProductId, ProductIdError};

/// Prefix of generated product IDs.
pub const GENERATED_ID_PREFIX: &str = "prod_";

/// Number of random characters after [`GENERATED_ID_PREFIX`].
pub const GENERATED_ID_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Errors raised while reading a product card.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The card title is blank.
    #[error("product card has no name")]
    MissingName,

    /// The price label holds no usable number.
    #[error("product card has no valid price: {0:?}")]
    InvalidPrice(String),

    /// The card's `data-id` is unusable.
    #[error("invalid product id: {0}")]
    InvalidId(#[from] ProductIdError),
}

/// One product card as rendered on the listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCard {
    /// The card's `data-id` attribute, if any.
    pub data_id: Option<String>,
    /// Card heading text.
    pub title: String,
    /// Price label as displayed, e.g. `"149.90 DH"`.
    pub price_text: String,
    /// Image source URL.
    pub image_src: String,
}

impl ProductCard {
    /// Convert the card into a cart candidate, generating an ID with the
    /// thread-local RNG when the card carries none.
    ///
    /// # Errors
    ///
    /// See [`ProductCard::to_candidate_with`].
    pub fn to_candidate(&self) -> Result<ProductCandidate, CatalogError> {
        self.to_candidate_with(&mut rand::rng())
    }

    /// Convert the card into a cart candidate using `rng` for ID generation.
    ///
    /// A blank `data_id` counts as missing.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingName`] for a blank title and
    /// [`CatalogError::InvalidPrice`] when the price label holds no usable
    /// number, including amounts too large or too precise to store.
    pub fn to_candidate_with<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<ProductCandidate, CatalogError> {
        let name = self.title.trim();
        if name.is_empty() {
            return Err(CatalogError::MissingName);
        }

        let unit_price = parse_price_label(&self.price_text)?;

        let id = match self.data_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => ProductId::parse(id)?,
            _ => generate_product_id(rng)?,
        };

        Ok(ProductCandidate::new(
            id,
            name,
            unit_price,
            self.image_src.trim(),
        ))
    }
}

/// Extract a price from a display label such as `"149.90 DH"`.
///
/// Every character other than ASCII digits and `.` is dropped, then the
/// leading `digits[.digits]` run is parsed. Decimal commas are not
/// understood: `"1,250.00"` reads as `1250.00` but `"1 250,00"` reads as
/// `125000`.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidPrice`] if no digits remain.
pub fn parse_price_label(label: &str) -> Result<Price, CatalogError> {
    let cleaned: String = label
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let number = match cleaned.match_indices('.').nth(1) {
        Some((second_dot, _)) => cleaned.get(..second_dot).unwrap_or_default(),
        None => cleaned.as_str(),
    };

    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return Err(CatalogError::InvalidPrice(label.to_owned()));
    }

    // "12." and ".5" are valid prices here
    let normalized = match (number.starts_with('.'), number.ends_with('.')) {
        (true, _) => format!("0{number}"),
        (false, true) => number.trim_end_matches('.').to_owned(),
        (false, false) => number.to_owned(),
    };

    Price::parse(&normalized).map_err(|_| CatalogError::InvalidPrice(label.to_owned()))
}

/// Generate a product ID of the form `prod_` followed by nine lowercase
/// base-36 characters.
///
/// # Errors
///
/// Propagates [`ProductIdError`] from validation of the generated string.
pub fn generate_product_id<R: Rng>(rng: &mut R) -> Result<ProductId, ProductIdError> {
    let mut id = String::with_capacity(GENERATED_ID_PREFIX.len() + GENERATED_ID_LEN);
    id.push_str(GENERATED_ID_PREFIX);
    for _ in 0..GENERATED_ID_LEN {
        let idx = rng.random_range(0..BASE36.len());
        if let Some(&b) = BASE36.get(idx) {
            id.push(char::from(b));
        }
    }
    ProductId::parse(&id)
}
