//! Offering-type indicator lists (SaaS / service / product).

pub const SAAS_INDICATORS: &[&str] = &[
    "saas",
    "software",
    "platform",
    "app",
    "dashboard",
    "subscription",
    "cloud",
    "api",
    "integration",
    "automation",
    "analytics",
    "free trial",
    "self-serve",
    "login",
];

pub const SERVICE_INDICATORS: &[&str] = &[
    "service",
    "services",
    "consulting",
    "agency",
    "done-for-you",
    "installation",
    "repair",
    "maintenance",
    "cleaning",
    "coaching",
    "appointment",
    "technicians",
    "contractors",
    "on-site",
];

pub const PRODUCT_INDICATORS: &[&str] = &[
    "product",
    "products",
    "merchandise",
    "inventory",
    "shipping",
    "retail",
    "store",
    "ecommerce",
    "e-commerce",
    "wholesale",
    "handmade",
    "catalog",
    "skus",
    "dropshipping",
];
