use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    models::{
        CreateOwner, CreateProperty, CreateTrace, Credentials, PagedResult, PriceUpdate,
        PropertyFilter, RegisterUser, UpdateOwner, UpdateProperty,
    },
    Owner, Property, PropertyImage, PropertyTrace,
};

// Requests

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDto {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub photo: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyDto {
    pub name: String,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub year: i32,
    pub area: f64,
    pub owner_id: Uuid,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyDto {
    pub name: String,
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub year: i32,
    pub area: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceUpdateDto {
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTraceDto {
    pub property_id: Uuid,
    pub date_utc: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Query string for the property search endpoint. All criteria optional,
/// missing ones do not constrain the result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySearchQuery {
    pub owner_id: Option<Uuid>,
    pub text: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub year: Option<i32>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSearchQuery {
    pub name: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_true() -> bool {
    true
}

// Responses

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub expires_at_utc: DateTime<Utc>,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub photo: String,
    pub created_at_utc: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub id: Uuid,
    pub name: String,
    pub address: AddressDto,
    pub price: PriceDto,
    pub year: i32,
    pub area: f64,
    pub owner_id: Uuid,
    pub active: bool,
    pub created_at_utc: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub id: Uuid,
    pub property_id: Uuid,
    pub url: String,
    pub description: String,
    pub enabled: bool,
    pub created_at_utc: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceResponse {
    pub id: Uuid,
    pub property_id: Uuid,
    pub date_utc: DateTime<Utc>,
    pub description: String,
    pub value: PriceDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

// Conversions

impl From<RegisterDto> for RegisterUser {
    fn from(dto: RegisterDto) -> Self {
        RegisterUser {
            email: dto.email,
            password: dto.password,
            role: dto.role.unwrap_or_else(|| "user".to_string()),
        }
    }
}

impl From<LoginDto> for Credentials {
    fn from(dto: LoginDto) -> Self {
        Credentials {
            email: dto.email,
            password: dto.password,
        }
    }
}

impl From<OwnerDto> for CreateOwner {
    fn from(dto: OwnerDto) -> Self {
        CreateOwner {
            name: dto.name,
            address: dto.address,
            photo: dto.photo,
        }
    }
}

impl From<OwnerDto> for UpdateOwner {
    fn from(dto: OwnerDto) -> Self {
        UpdateOwner {
            name: dto.name,
            address: dto.address,
            photo: dto.photo,
        }
    }
}

impl From<CreatePropertyDto> for CreateProperty {
    fn from(dto: CreatePropertyDto) -> Self {
        CreateProperty {
            name: dto.name,
            street: dto.street,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            zip_code: dto.zip_code,
            price: dto.price,
            currency: dto.currency,
            year: dto.year,
            area: dto.area,
            owner_id: dto.owner_id,
            active: dto.active,
        }
    }
}

impl From<UpdatePropertyDto> for UpdateProperty {
    fn from(dto: UpdatePropertyDto) -> Self {
        UpdateProperty {
            name: dto.name,
            street: dto.street,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            zip_code: dto.zip_code,
            year: dto.year,
            area: dto.area,
        }
    }
}

impl From<PriceUpdateDto> for PriceUpdate {
    fn from(dto: PriceUpdateDto) -> Self {
        PriceUpdate {
            amount: dto.amount,
            currency: dto.currency,
        }
    }
}

impl From<CreateTraceDto> for CreateTrace {
    fn from(dto: CreateTraceDto) -> Self {
        CreateTrace {
            property_id: dto.property_id,
            date_utc: dto.date_utc,
            description: dto.description,
            amount: dto.amount,
            currency: dto.currency,
        }
    }
}

impl From<PropertySearchQuery> for PropertyFilter {
    fn from(query: PropertySearchQuery) -> Self {
        let mut filter = PropertyFilter::new().with_price_range(query.price_min, query.price_max);
        if let Some(owner_id) = query.owner_id {
            filter = filter.with_owner(owner_id);
        }
        if let Some(text) = query.text {
            filter = filter.with_text(text);
        }
        if let Some(year) = query.year {
            filter = filter.with_year(year);
        }
        filter.with_page(
            query.page.unwrap_or(0),
            query.page_size.unwrap_or(0),
        )
    }
}

impl From<crate::domain::models::AuthToken> for AuthResponse {
    fn from(token: crate::domain::models::AuthToken) -> Self {
        AuthResponse {
            access_token: token.access_token,
            expires_at_utc: token.expires_at_utc,
            email: token.email,
            role: token.role,
        }
    }
}

impl From<&Owner> for OwnerResponse {
    fn from(owner: &Owner) -> Self {
        OwnerResponse {
            id: owner.id(),
            name: owner.name().to_string(),
            address: owner.address().to_string(),
            photo: owner.photo().to_string(),
            created_at_utc: owner.created_at_utc(),
        }
    }
}

impl From<&Property> for PropertyResponse {
    fn from(property: &Property) -> Self {
        let address = property.address();
        let price = property.price();
        PropertyResponse {
            id: property.id(),
            name: property.name().to_string(),
            address: AddressDto {
                street: address.street().to_string(),
                city: address.city().to_string(),
                state: address.state().to_string(),
                country: address.country().to_string(),
                zip_code: address.zip_code().to_string(),
            },
            price: PriceDto {
                amount: price.amount(),
                currency: price.currency().to_string(),
            },
            year: property.year(),
            area: property.area(),
            owner_id: property.owner_id(),
            active: property.active(),
            created_at_utc: property.created_at_utc(),
        }
    }
}

impl From<&PropertyImage> for ImageResponse {
    fn from(image: &PropertyImage) -> Self {
        ImageResponse {
            id: image.id(),
            property_id: image.property_id(),
            url: image.url().to_string(),
            description: image.description().to_string(),
            enabled: image.enabled(),
            created_at_utc: image.created_at_utc(),
        }
    }
}

impl From<&PropertyTrace> for TraceResponse {
    fn from(trace: &PropertyTrace) -> Self {
        TraceResponse {
            id: trace.id(),
            property_id: trace.property_id(),
            date_utc: trace.date_utc(),
            description: trace.description().to_string(),
            value: PriceDto {
                amount: trace.value().amount(),
                currency: trace.value().currency().to_string(),
            },
        }
    }
}

impl From<PagedResult<Property>> for PagedResponse<PropertyResponse> {
    fn from(page: PagedResult<Property>) -> Self {
        PagedResponse {
            items: page.items.iter().map(PropertyResponse::from).collect(),
            page: page.page,
            page_size: page.page_size,
            total: page.total,
        }
    }
}
