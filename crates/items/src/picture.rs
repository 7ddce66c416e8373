use catalog_core::{validate, DomainError, DomainResult, ValueObject};

/// Input for [`Picture::new`].
#[derive(Debug, Clone, Default)]
pub struct NewPicture {
    pub picture_id: String,
    pub url: String,
    pub secure_url: String,
    pub size: Option<String>,
    pub max_size: Option<String>,
    pub quality: Option<String>,
    pub order: Option<u32>,
}

/// A listing picture; `order` starts at 1 and the lowest order is the main picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    picture_id: String,
    url: String,
    secure_url: String,
    size: String,
    max_size: String,
    quality: String,
    order: u32,
}

impl ValueObject for Picture {}

impl Picture {
    pub fn new(new: NewPicture) -> DomainResult<Self> {
        validate::text(new.picture_id.trim(), 1, 100, "picture id")?;
        validate::text(new.url.trim(), 1, 1000, "url")?;
        validate::text(new.secure_url.trim(), 1, 1000, "secure url")?;
        if new.order == Some(0) {
            return Err(DomainError::validation("picture order must be greater than 0"));
        }

        Ok(Self {
            picture_id: new.picture_id.trim().to_string(),
            url: new.url.trim().to_string(),
            secure_url: new.secure_url.trim().to_string(),
            size: validate::trimmed(new.size).unwrap_or_else(|| "500x500".to_string()),
            max_size: validate::trimmed(new.max_size).unwrap_or_else(|| "1200x1200".to_string()),
            quality: validate::trimmed(new.quality).unwrap_or_else(|| "high".to_string()),
            order: new.order.unwrap_or(1),
        })
    }

    pub fn picture_id(&self) -> &str {
        &self.picture_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn secure_url(&self) -> &str {
        &self.secure_url
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn max_size(&self) -> &str {
        &self.max_size
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}
