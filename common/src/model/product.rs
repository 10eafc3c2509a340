use serde::{Deserialize, Serialize};

/// A product listing on the public site.
///
/// On the wire the conductivity is stored under `thermal` and the picture under
/// `image`; the longer names are accepted as aliases when reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    /// Unit-annotated value, e.g. `8.5 W/m·K`.
    #[serde(rename = "thermal", alias = "thermalConductivity")]
    pub thermal_conductivity: String,
    pub description: String,
    #[serde(rename = "image", alias = "imageUrl")]
    pub image_url: String,
}

impl Product {
    /// Values given to a product added from the editor.
    pub fn placeholder() -> Self {
        Self {
            name: "新产品".to_string(),
            thermal_conductivity: "0 W/m·K".to_string(),
            description: "产品描述".to_string(),
            image_url: "https://picsum.photos/id/1/500/300".to_string(),
        }
    }
}

/// Editable sub-fields of a [`Product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Thermal,
    Description,
    Image,
}

impl ProductField {
    pub const ALL: [ProductField; 4] = [
        ProductField::Name,
        ProductField::Thermal,
        ProductField::Description,
        ProductField::Image,
    ];

    /// Suffix used in positional control ids (`product{n}{suffix}`).
    pub fn control_suffix(self) -> &'static str {
        match self {
            ProductField::Name => "Name",
            ProductField::Thermal => "Thermal",
            ProductField::Description => "Desc",
            ProductField::Image => "Image",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProductField::Name => "产品名称",
            ProductField::Thermal => "导热系数",
            ProductField::Description => "产品描述",
            ProductField::Image => "产品图片URL",
        }
    }

    pub fn get(self, product: &Product) -> &str {
        match self {
            ProductField::Name => &product.name,
            ProductField::Thermal => &product.thermal_conductivity,
            ProductField::Description => &product.description,
            ProductField::Image => &product.image_url,
        }
    }

    pub fn set(self, product: &mut Product, value: String) {
        match self {
            ProductField::Name => product.name = value,
            ProductField::Thermal => product.thermal_conductivity = value,
            ProductField::Description => product.description = value,
            ProductField::Image => product.image_url = value,
        }
    }
}
