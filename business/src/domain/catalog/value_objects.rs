/// Billing classification of a product. A cart may not mix the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanType {
    Prepaid,
    Postpaid,
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanType::Prepaid => write!(f, "prepaid"),
            PlanType::Postpaid => write!(f, "postpaid"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductCategory {
    Plan,
    Device,
    Addon,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Plan => write!(f, "plan"),
            ProductCategory::Device => write!(f, "device"),
            ProductCategory::Addon => write!(f, "addon"),
        }
    }
}
