use crate::models::{
    CategoryCount, Customer, CustomerStats, CustomerStatus, InventorySummary, Product,
};
use std::collections::BTreeMap;

/// Category filter value that matches every product.
pub const ALL_CATEGORIES: &str = "All";

pub fn customer_stats(customers: &[Customer]) -> CustomerStats {
    let total = customers.len();
    let active = customers
        .iter()
        .filter(|c| c.status == CustomerStatus::Active)
        .count();
    let inactive = customers
        .iter()
        .filter(|c| c.status == CustomerStatus::Inactive)
        .count();
    let with_gstin = customers
        .iter()
        .filter(|c| c.gstin.as_deref().is_some_and(|g| !g.trim().is_empty()))
        .count();

    let gstin_percentage = if total == 0 {
        "0%".to_string()
    } else {
        let pct = (with_gstin as f64 * 100.0 / total as f64).round() as u64;
        format!("{pct}%")
    };

    CustomerStats {
        total,
        active,
        inactive,
        with_gstin,
        gstin_percentage,
    }
}

pub fn count_in_category(products: &[Product], filter: &str) -> usize {
    if filter == ALL_CATEGORIES {
        return products.len();
    }
    products.iter().filter(|p| p.category == filter).count()
}

pub fn inventory_summary(products: &[Product]) -> InventorySummary {
    let total_value: f64 = products
        .iter()
        .map(|p| p.current_stock * p.unit_price)
        .sum();
    let low_stock = products
        .iter()
        .filter(|p| p.current_stock <= p.min_stock)
        .count();
    let out_of_stock = products.iter().filter(|p| p.current_stock == 0.0).count();

    // Halves round away from zero, not to even.
    let display_value = (total_value * 100.0).round() / 100.0;

    InventorySummary {
        total_products: products.len(),
        total_value,
        total_value_display: format!("{display_value:.2}"),
        low_stock,
        out_of_stock,
    }
}

/// `All` first, then every distinct category in name order.
pub fn category_breakdown(products: &[Product]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for product in products {
        *counts.entry(product.category.as_str()).or_default() += 1;
    }

    let mut breakdown = Vec::with_capacity(counts.len() + 1);
    breakdown.push(CategoryCount {
        category: ALL_CATEGORIES.to_string(),
        count: products.len(),
    });
    breakdown.extend(counts.into_iter().map(|(category, count)| CategoryCount {
        category: category.to_string(),
        count,
    }));
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, status: CustomerStatus, gstin: Option<&str>) -> Customer {
        Customer {
            id: id.to_string(),
            name: format!("Customer {id}"),
            email: None,
            phone: None,
            address: None,
            status,
            gstin: gstin.map(str::to_string),
        }
    }

    fn product(category: &str, stock: f64, min: f64, price: f64) -> Product {
        Product {
            id: format!("{category}-{stock}"),
            name: "Widget".to_string(),
            category: category.to_string(),
            current_stock: stock,
            min_stock: min,
            unit_price: price,
        }
    }

    #[test]
    fn customer_stats_empty_list_is_all_zero() {
        let stats = customer_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.active, 0);
        assert_eq!(stats.inactive, 0);
        assert_eq!(stats.with_gstin, 0);
        assert_eq!(stats.gstin_percentage, "0%");
    }

    #[test]
    fn customer_stats_counts_statuses_and_blank_gstin() {
        let customers = vec![
            customer("1", CustomerStatus::Active, Some("27AAPFU0939F1ZV")),
            customer("2", CustomerStatus::Inactive, Some("   ")),
            customer("3", CustomerStatus::Active, None),
            customer("4", CustomerStatus::Unknown, Some("29ABCDE1234F1Z5")),
        ];

        let stats = customer_stats(&customers);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.inactive, 1);
        assert!(stats.active + stats.inactive <= stats.total);
        assert_eq!(stats.with_gstin, 2);
        assert_eq!(stats.gstin_percentage, "50%");
    }

    #[test]
    fn customer_stats_percentage_rounds_to_nearest() {
        let customers = vec![
            customer("1", CustomerStatus::Active, Some("A")),
            customer("2", CustomerStatus::Active, None),
            customer("3", CustomerStatus::Active, None),
        ];
        assert_eq!(customer_stats(&customers).gstin_percentage, "33%");

        let customers = vec![
            customer("1", CustomerStatus::Active, Some("A")),
            customer("2", CustomerStatus::Active, Some("B")),
            customer("3", CustomerStatus::Inactive, None),
        ];
        assert_eq!(customer_stats(&customers).gstin_percentage, "67%");
    }

    #[test]
    fn customer_stats_all_with_gstin_is_hundred_percent() {
        let customers = vec![
            customer("1", CustomerStatus::Active, Some("A")),
            customer("2", CustomerStatus::Inactive, Some(" B ")),
        ];
        let stats = customer_stats(&customers);
        assert_eq!(stats.active + stats.inactive, stats.total);
        assert_eq!(stats.gstin_percentage, "100%");
    }

    #[test]
    fn category_count_all_and_exact_match() {
        let products = vec![
            product("Tools", 1.0, 0.0, 1.0),
            product("tools", 1.0, 0.0, 1.0),
            product("Paint", 1.0, 0.0, 1.0),
        ];
        assert_eq!(count_in_category(&products, ALL_CATEGORIES), 3);
        assert_eq!(count_in_category(&products, "Tools"), 1);
        assert_eq!(count_in_category(&products, "Garden"), 0);
    }

    #[test]
    fn inventory_value_sums_fractional_and_zero_prices() {
        let products = vec![
            product("A", 3.0, 1.0, 2.5),
            product("A", 10.0, 1.0, 0.0),
            product("B", 4.0, 1.0, 0.25),
        ];
        let summary = inventory_summary(&products);
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.total_value, 3.0 * 2.5 + 10.0 * 0.0 + 4.0 * 0.25);
        assert_eq!(summary.total_value_display, "8.50");
    }

    #[test]
    fn inventory_display_rounds_half_cent_up() {
        let summary = inventory_summary(&[product("A", 1.0, 0.0, 0.125)]);
        assert_eq!(summary.total_value, 0.125);
        assert_eq!(summary.total_value_display, "0.13");
    }

    #[test]
    fn low_stock_boundary_is_inclusive_and_zero_counts_twice() {
        let products = vec![
            product("A", 5.0, 5.0, 1.0),
            product("A", 0.0, 2.0, 1.0),
            product("A", 6.0, 5.0, 1.0),
        ];
        let summary = inventory_summary(&products);
        assert_eq!(summary.low_stock, 2);
        assert_eq!(summary.out_of_stock, 1);
    }

    #[test]
    fn negative_values_flow_through() {
        let products = vec![product("A", -2.0, 0.0, 3.0)];
        let summary = inventory_summary(&products);
        assert_eq!(summary.total_value, -6.0);
        assert_eq!(summary.total_value_display, "-6.00");
        assert_eq!(summary.low_stock, 1);
        assert_eq!(summary.out_of_stock, 0);
    }

    #[test]
    fn breakdown_lists_all_first_then_sorted_categories() {
        let products = vec![
            product("Tools", 1.0, 0.0, 1.0),
            product("Paint", 1.0, 0.0, 1.0),
            product("Tools", 2.0, 0.0, 1.0),
        ];
        let breakdown = category_breakdown(&products);
        let names: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, ["All", "Paint", "Tools"]);
        assert_eq!(breakdown[0].count, 3);
        assert_eq!(breakdown[2].count, 2);
    }
}
