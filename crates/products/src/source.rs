//! Tab-separated catalog source format.
//!
//! One record per line, no header, ten fields in this order:
//!
//! ```text
//! status  id  name  supplier  brand  size  class  available  sales  last_received
//! ```
//!
//! `status` is active only when it is exactly `Active`; any other word marks the
//! product restricted. `class` is the first character of its field. Fields after
//! the tenth are ignored.

use std::io::BufRead;

use distributor_core::ProductId;

use crate::error::{CatalogError, MalformedReason};
use crate::field::ProductField;
use crate::product::{Product, ProductClass};

/// Column order of a source line.
pub const COLUMNS: [ProductField; 10] = [
    ProductField::Status,
    ProductField::Id,
    ProductField::Name,
    ProductField::Supplier,
    ProductField::Brand,
    ProductField::Size,
    ProductField::Class,
    ProductField::Available,
    ProductField::Sales,
    ProductField::LastReceived,
];

pub const ACTIVE: &str = "Active";
pub const RESTRICTED: &str = "Restricted";

/// Read every record from `reader`.
///
/// Every line must be a full record, blank ones included. The first malformed
/// line aborts the read, so callers either get every record or none of them.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Product>, CatalogError> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        records.push(parse_line(index + 1, line)?);
    }

    Ok(records)
}

/// Parse a single source line. `line_no` is only used for error reporting.
pub fn parse_line(line_no: usize, line: &str) -> Result<Product, CatalogError> {
    let values: Vec<&str> = line.split('\t').collect();
    if values.len() < COLUMNS.len() {
        return Err(CatalogError::malformed(
            line_no,
            MalformedReason::MissingFields {
                expected: COLUMNS.len(),
                found: values.len(),
            },
        ));
    }

    let status = values[0] == ACTIVE;
    let id = ProductId::new(parse_int(line_no, ProductField::Id, values[1])?);
    let product_class = values[6]
        .chars()
        .next()
        .map(ProductClass::new)
        .ok_or_else(|| {
            CatalogError::malformed(
                line_no,
                MalformedReason::EmptyField {
                    field: ProductField::Class,
                },
            )
        })?;
    let available = parse_int(line_no, ProductField::Available, values[7])?;
    let sales = parse_int(line_no, ProductField::Sales, values[8])?;
    let last_received = parse_int(line_no, ProductField::LastReceived, values[9])?;

    Ok(Product::new(
        values[2],
        status,
        id,
        values[3],
        values[4],
        values[5],
        product_class,
        available,
        sales,
        last_received,
    ))
}

/// Render `product` as a source line (without the trailing newline).
pub fn format_line(product: &Product) -> String {
    COLUMNS
        .iter()
        .map(|field| match field {
            ProductField::Status if product.status() => ACTIVE.to_string(),
            ProductField::Status => RESTRICTED.to_string(),
            other => other.render(product),
        })
        .collect::<Vec<_>>()
        .join("\t")
}

fn parse_int(line_no: usize, field: ProductField, raw: &str) -> Result<i32, CatalogError> {
    raw.parse::<i32>().map_err(|_| {
        CatalogError::malformed(
            line_no,
            MalformedReason::InvalidInteger {
                field,
                value: raw.to_string(),
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE_A: &str = "Active\t100001\tWidget A\tAcme\tAcmeBrand\t12oz\tN\t50\t10\t20230101";
    const LINE_B: &str = "Restricted\t100002\tWidget B\tAcme\tAcmeBrand\t6pk\tB\t5\t2\t20230215";

    #[test]
    fn parses_all_ten_fields() {
        let p = parse_line(1, LINE_A).unwrap();
        assert!(p.status());
        assert_eq!(p.id_typed(), ProductId::new(100001));
        assert_eq!(p.name(), "Widget A");
        assert_eq!(p.supplier(), "Acme");
        assert_eq!(p.brand(), "AcmeBrand");
        assert_eq!(p.size(), "12oz");
        assert_eq!(p.product_class().code(), 'N');
        assert_eq!(p.available(), 50);
        assert_eq!(p.sales(), 10);
        assert_eq!(p.last_received(), 20230101);
    }

    #[test]
    fn only_exact_active_word_is_active() {
        assert!(!parse_line(1, LINE_B).unwrap().status());

        let lower = LINE_A.replacen("Active", "active", 1);
        assert!(!parse_line(1, &lower).unwrap().status());

        let typo = LINE_A.replacen("Active", "Actve", 1);
        assert!(!parse_line(1, &typo).unwrap().status());
    }

    #[test]
    fn class_takes_first_character() {
        let line = LINE_A.replace("\tN\t", "\tNonAlc\t");
        assert_eq!(parse_line(1, &line).unwrap().product_class().code(), 'N');
    }

    #[test]
    fn empty_class_is_malformed() {
        let line = LINE_A.replace("\tN\t", "\t\t");
        let err = parse_line(4, &line).unwrap_err();
        match err {
            CatalogError::MalformedRecord { line, reason } => {
                assert_eq!(line, 4);
                assert_eq!(
                    reason,
                    MalformedReason::EmptyField {
                        field: ProductField::Class
                    }
                );
            }
            _ => panic!("Expected MalformedRecord"),
        }
    }

    #[test]
    fn non_numeric_field_names_field_and_value() {
        let line = LINE_A.replace("\t50\t", "\tfifty\t");
        let err = parse_line(2, &line).unwrap_err();
        assert_eq!(err.line(), Some(2));
        let msg = err.to_string();
        assert!(msg.contains("available"), "{msg}");
        assert!(msg.contains("fifty"), "{msg}");
    }

    #[test]
    fn short_line_is_malformed() {
        let err = parse_line(7, "Active\t100001\tWidget A").unwrap_err();
        match err {
            CatalogError::MalformedRecord { reason, .. } => assert_eq!(
                reason,
                MalformedReason::MissingFields {
                    expected: 10,
                    found: 3
                }
            ),
            _ => panic!("Expected MalformedRecord"),
        }
    }

    #[test]
    fn extra_fields_are_ignored() {
        let line = format!("{LINE_A}\textra\tcolumns");
        assert_eq!(parse_line(1, &line).unwrap(), parse_line(1, LINE_A).unwrap());
    }

    #[test]
    fn read_records_strips_cr() {
        let input = format!("{LINE_A}\r\n{LINE_B}\r\n");
        let records = read_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].last_received(), 20230101);
        assert_eq!(records[1].last_received(), 20230215);
    }

    #[test]
    fn read_records_rejects_interior_blank_line() {
        let input = format!("{LINE_A}\n\r\n{LINE_B}\n");
        let err = read_records(input.as_bytes()).unwrap_err();
        match err {
            CatalogError::MalformedRecord { line, reason } => {
                assert_eq!(line, 2);
                assert_eq!(
                    reason,
                    MalformedReason::MissingFields {
                        expected: 10,
                        found: 1
                    }
                );
            }
            _ => panic!("Expected MalformedRecord"),
        }
    }

    #[test]
    fn read_records_reports_line_number_of_first_bad_line() {
        let bad = LINE_B.replace("100002", "abc");
        let input = format!("{LINE_A}\n{LINE_A}\n{bad}\n");
        let err = read_records(input.as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn format_line_matches_source_form() {
        assert_eq!(format_line(&parse_line(1, LINE_A).unwrap()), LINE_A);
        assert_eq!(format_line(&parse_line(1, LINE_B).unwrap()), LINE_B);
    }
}
