// ── Built-in rows ──
//
// Shown ahead of fetched data in the customer list and service catalog.

use rust_decimal::Decimal;

use super::customers::CustomerRow;
use super::services::CatalogEntry;

#[allow(clippy::too_many_arguments)]
fn customer(
    id: u64,
    company: &str,
    contact: &str,
    phone: &str,
    email: &str,
    industry: &str,
    product: &str,
    address: &str,
    notes: &str,
) -> CustomerRow {
    CustomerRow {
        id,
        company_name: company.into(),
        contact_name: contact.into(),
        phone: phone.into(),
        email: email.into(),
        industry: industry.into(),
        product_interested: product.into(),
        address: address.into(),
        notes: notes.into(),
        lead_id: None,
    }
}

pub fn seed_customers() -> Vec<CustomerRow> {
    vec![
        customer(
            1,
            "Tech Solutions Inc.",
            "John Smith",
            "+1-555-0123",
            "john@techsolutions.com",
            "Technology",
            "Project Management System",
            "123 Tech Street, Silicon Valley, CA",
            "Interested in enterprise solution",
        ),
        customer(
            2,
            "Healthcare Plus",
            "Sarah Johnson",
            "+1-555-0124",
            "sarah@healthcareplus.com",
            "Healthcare",
            "CRM Dashboard",
            "456 Medical Ave, Boston, MA",
            "Needs integration with existing systems",
        ),
        customer(
            3,
            "Green Energy Corp",
            "Mike Wilson",
            "+1-555-0125",
            "mike@greenenergy.com",
            "Manufacturing",
            "Custom Software Development",
            "789 Energy Blvd, Austin, TX",
            "Focus on sustainability features",
        ),
    ]
}

fn catalog(
    id: u64,
    name: &str,
    category: &str,
    price: i64,
    billing: &str,
    features: &[&str],
    active: bool,
) -> CatalogEntry {
    CatalogEntry {
        id,
        name: name.into(),
        category: category.into(),
        billing: billing.into(),
        price: Some(Decimal::new(price * 100, 2)),
        features: features.iter().map(|&f| f.to_owned()).collect(),
        active,
    }
}

pub fn seed_services() -> Vec<CatalogEntry> {
    const SERVER: &str = "Server Management";
    const WEB: &str = "Web Development";
    vec![
        catalog(
            1,
            "Basic Care",
            SERVER,
            15,
            "monthly",
            &[
                "24/7 Monitoring",
                "2 Support Requests/mo",
                "Security Hardening",
                "Weekly Backups Check",
            ],
            true,
        ),
        catalog(
            2,
            "Starter Plus",
            SERVER,
            35,
            "monthly",
            &[
                "Everything in Basic",
                "5 Support Requests/mo",
                "Monthly Updates & Patch Management",
                "DNS / Mail Fix",
            ],
            true,
        ),
        catalog(
            3,
            "Pro Admin",
            SERVER,
            65,
            "monthly",
            &[
                "Unlimited Support Requests",
                "Proactive Monitoring",
                "Full Server Stack Optimization",
                "Migration Support",
                "Malware/Blacklist Removal",
            ],
            true,
        ),
        catalog(
            4,
            "Website Design",
            WEB,
            500,
            "one-time",
            &[
                "Custom Design",
                "Responsive Layout",
                "SEO Optimization",
                "3 Revisions Included",
            ],
            true,
        ),
        catalog(
            5,
            "E-commerce Setup",
            WEB,
            1200,
            "one-time",
            &[
                "Shopping Cart Integration",
                "Payment Gateway Setup",
                "Inventory Management",
                "Order Tracking System",
            ],
            false,
        ),
    ]
}
