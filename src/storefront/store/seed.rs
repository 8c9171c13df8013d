//! The bundled catalog: 25 products across four categories, plus vouchers.
//!
//! Category names are the uppercase Vietnamese labels shown in the navbar;
//! products reference them by name and their subcategory by slug.

use crate::model::{Category, Product, SubCategory, Voucher};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

pub const WOMEN: &str = "NỮ";
pub const MEN: &str = "NAM";
pub const GIRLS: &str = "BÉ GÁI";
pub const BOYS: &str = "BÉ TRAI";

pub const FREESHIP: &str = "Freeship";
pub const NEW_ARRIVAL: &str = "Hàng mới";

pub static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(1, "Áo thun nữ basic cổ tròn", 199_000)
            .in_category(WOMEN, "ao-thun")
            .with_images(&["/assets/product1-1.webp", "/assets/product1-2.webp"])
            .with_badge(FREESHIP)
            .with_sizes(&["S", "M", "L", "XL"]),
        Product::new(2, "Áo thun nữ oversize họa tiết", 249_000)
            .in_category(WOMEN, "ao-thun")
            .with_badge(NEW_ARRIVAL)
            .with_sizes(&["M", "L", "XL", "XXL"]),
        Product::new(3, "Áo thun nữ crop top", 179_000)
            .in_category(WOMEN, "ao-thun")
            .with_sizes(&["XS", "S", "M", "L"]),
        Product::new(4, "Áo sơ mi nữ trắng công sở", 399_000)
            .in_category(WOMEN, "ao-so-mi")
            .with_badge(FREESHIP)
            .with_sizes(&["S", "M", "L", "XL"]),
        Product::new(5, "Áo sơ mi nữ kẻ sọc", 449_000)
            .in_category(WOMEN, "ao-so-mi")
            .with_sizes(&["M", "L", "XL"]),
        Product::new(6, "Áo khoác nữ blazer", 699_000)
            .in_category(WOMEN, "ao-khoac")
            .with_badge(NEW_ARRIVAL)
            .with_sizes(&["S", "M", "L", "XL", "XXL"]),
        Product::new(7, "Áo khoác nữ denim", 549_000)
            .in_category(WOMEN, "ao-khoac")
            .with_sizes(&["M", "L", "XL"]),
        Product::new(8, "Áo thun nam basic cotton", 179_000)
            .in_category(MEN, "ao-thun")
            .with_badge(FREESHIP)
            .with_sizes(&["M", "L", "XL", "XXL", "XXXL"]),
        Product::new(9, "Áo thun nam polo", 299_000)
            .in_category(MEN, "ao-thun")
            .with_sizes(&["L", "XL", "XXL"]),
        Product::new(10, "Áo thun nam tank top", 149_000)
            .in_category(MEN, "ao-thun")
            .with_sizes(&["M", "L", "XL"]),
        Product::new(11, "Quần jean nam slim fit", 499_000)
            .in_category(MEN, "quan-jean")
            .with_badge(NEW_ARRIVAL)
            .with_sizes(&["29", "30", "31", "32", "33", "34"]),
        Product::new(12, "Quần jean nam straight fit", 449_000)
            .in_category(MEN, "quan-jean")
            .with_sizes(&["30", "31", "32", "33", "34"]),
        Product::new(13, "Quần jean nam skinny", 399_000)
            .in_category(MEN, "quan-jean")
            .with_sizes(&["28", "29", "30", "31", "32"]),
        Product::new(14, "Váy bé gái hoa nhí", 299_000)
            .in_category(GIRLS, "vay")
            .with_badge(FREESHIP)
            .with_sizes(&["2-3 tuổi", "4-5 tuổi", "6-7 tuổi"]),
        Product::new(15, "Váy bé gái công chúa", 399_000)
            .in_category(GIRLS, "vay")
            .with_sizes(&["3-4 tuổi", "5-6 tuổi", "7-8 tuổi"]),
        Product::new(16, "Áo thun bé gái hình thú", 149_000)
            .in_category(GIRLS, "ao-thun")
            .with_sizes(&["2-3 tuổi", "4-5 tuổi", "6-7 tuổi", "8-9 tuổi"]),
        Product::new(17, "Áo thun bé gái họa tiết", 179_000)
            .in_category(GIRLS, "ao-thun")
            .with_badge(NEW_ARRIVAL)
            .with_sizes(&["3-4 tuổi", "5-6 tuổi", "7-8 tuổi"]),
        Product::new(18, "Áo thun bé trai siêu anh hùng", 199_000)
            .in_category(BOYS, "ao-thun")
            .with_sizes(&["2-3 tuổi", "4-5 tuổi", "6-7 tuổi", "8-9 tuổi"]),
        Product::new(19, "Áo thun bé trai xe hơi", 179_000)
            .in_category(BOYS, "ao-thun")
            .with_badge(FREESHIP)
            .with_sizes(&["3-4 tuổi", "5-6 tuổi", "7-8 tuổi"]),
        Product::new(20, "Quần short bé trai thể thao", 249_000)
            .in_category(BOYS, "quan-short")
            .with_sizes(&["2-3 tuổi", "4-5 tuổi", "6-7 tuổi"]),
        Product::new(21, "Quần short bé trai jean", 299_000)
            .in_category(BOYS, "quan-short")
            .with_badge(NEW_ARRIVAL)
            .with_sizes(&["4-5 tuổi", "6-7 tuổi", "8-9 tuổi"]),
        Product::new(22, "Áo khoác nữ hoodie", 549_000)
            .in_category(WOMEN, "ao-khoac")
            .with_sizes(&["S", "M", "L", "XL"]),
        // Listed under the t-shirt rack even though it is a shirt.
        Product::new(23, "Áo sơ mi nam kẻ caro", 399_000)
            .in_category(MEN, "ao-thun")
            .with_badge(FREESHIP)
            .with_sizes(&["M", "L", "XL", "XXL"]),
        Product::new(24, "Váy bé gái dự tiệc", 599_000)
            .in_category(GIRLS, "vay")
            .with_sizes(&["3-4 tuổi", "5-6 tuổi", "7-8 tuổi", "9-10 tuổi"]),
        Product::new(25, "Quần short bé trai kaki", 269_000)
            .in_category(BOYS, "quan-short")
            .with_sizes(&["3-4 tuổi", "5-6 tuổi", "7-8 tuổi"]),
    ]
});

fn sub(id: u32, name: &str, slug: &str) -> SubCategory {
    SubCategory {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

pub static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category {
            id: 1,
            name: WOMEN.to_string(),
            slug: "nu".to_string(),
            sub_categories: vec![
                sub(101, "Áo thun", "ao-thun"),
                sub(102, "Áo sơ mi", "ao-so-mi"),
                sub(103, "Áo khoác", "ao-khoac"),
            ],
        },
        Category {
            id: 2,
            name: MEN.to_string(),
            slug: "nam".to_string(),
            sub_categories: vec![sub(201, "Áo thun", "ao-thun"), sub(202, "Quần jean", "quan-jean")],
        },
        Category {
            id: 3,
            name: GIRLS.to_string(),
            slug: "be-gai".to_string(),
            sub_categories: vec![sub(301, "Váy", "vay"), sub(302, "Áo thun", "ao-thun")],
        },
        Category {
            id: 4,
            name: BOYS.to_string(),
            slug: "be-trai".to_string(),
            sub_categories: vec![
                sub(401, "Áo thun", "ao-thun"),
                sub(402, "Quần short", "quan-short"),
            ],
        },
    ]
});

pub static VOUCHERS: Lazy<Vec<Voucher>> = Lazy::new(|| {
    vec![
        Voucher {
            id: 1,
            title: "Voucher 50K".to_string(),
            description: "Giảm 50k cho đơn từ 999k".to_string(),
            expires_on: date(2025, 10, 31),
            condition: "Áp dụng cho toàn bộ sản phẩm".to_string(),
        },
        Voucher {
            id: 2,
            title: "Voucher 80K".to_string(),
            description: "Giảm 80k cho đơn Online đầu tiên từ 399k".to_string(),
            expires_on: date(2025, 12, 31),
            condition: "Chỉ áp dụng cho khách hàng mới".to_string(),
        },
    ]
});

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_sequential() {
        let ids: HashSet<u32> = PRODUCTS.iter().map(|p| p.id.0).collect();
        assert_eq!(ids.len(), 25);
        assert!((1..=25).all(|n| ids.contains(&n)));
    }

    #[test]
    fn men_category_has_seven_products() {
        let count = PRODUCTS
            .iter()
            .filter(|p| p.category.as_deref() == Some(MEN))
            .count();
        assert_eq!(count, 7);
    }

    #[test]
    fn every_product_has_a_thumbnail() {
        assert!(PRODUCTS.iter().all(|p| p.thumbnail().is_some()));
    }
}
