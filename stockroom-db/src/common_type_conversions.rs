use sea_orm::ActiveValue;
use stockroom_api_types::{InventoryItem, Sale};

use crate::entity;

impl From<entity::inventory::Model> for InventoryItem {
    fn from(value: entity::inventory::Model) -> Self {
        let entity::inventory::Model {
            id,
            product_name,
            quantity,
        } = value;
        Self {
            id,
            product_name,
            quantity,
        }
    }
}

impl From<entity::sale::Model> for Sale {
    fn from(value: entity::sale::Model) -> Self {
        let entity::sale::Model {
            id: _,
            invoice_id,
            branch,
            city,
            customer_type,
            gender,
            product_line,
            unit_price,
            quantity,
            tax_5_percent,
            total,
            date,
            time,
            payment,
            cogs,
            gross_margin_percentage,
            gross_income,
            rating,
        } = value;
        Self {
            invoice_id,
            branch,
            city,
            customer_type,
            gender,
            product_line,
            unit_price,
            quantity,
            tax_5_percent,
            total,
            date,
            time,
            payment,
            cogs,
            gross_margin_percentage,
            gross_income,
            rating,
        }
    }
}

impl From<Sale> for entity::sale::ActiveModel {
    fn from(value: Sale) -> Self {
        let Sale {
            invoice_id,
            branch,
            city,
            customer_type,
            gender,
            product_line,
            unit_price,
            quantity,
            tax_5_percent,
            total,
            date,
            time,
            payment,
            cogs,
            gross_margin_percentage,
            gross_income,
            rating,
        } = value;
        use ActiveValue::Set;
        Self {
            id: ActiveValue::NotSet,
            invoice_id: Set(invoice_id),
            branch: Set(branch),
            city: Set(city),
            customer_type: Set(customer_type),
            gender: Set(gender),
            product_line: Set(product_line),
            unit_price: Set(unit_price),
            quantity: Set(quantity),
            tax_5_percent: Set(tax_5_percent),
            total: Set(total),
            date: Set(date),
            time: Set(time),
            payment: Set(payment),
            cogs: Set(cogs),
            gross_margin_percentage: Set(gross_margin_percentage),
            gross_income: Set(gross_income),
            rating: Set(rating),
        }
    }
}
