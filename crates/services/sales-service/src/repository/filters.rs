//! LIKE-based column filters.
//!
//! Prefix, suffix and substring filters escape the caller's input so that
//! `%` and `_` match literally. Raw patterns are passed through untouched.

use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::ColumnTrait;

/// Escape character used in every generated LIKE clause
const LIKE_ESCAPE: char = '\\';

/// Escape LIKE metacharacters in user input.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

fn column<C: ColumnTrait>(col: C) -> Expr {
    Expr::col((col.entity_name(), col))
}

fn escaped(pattern: String) -> LikeExpr {
    LikeExpr::new(pattern).escape(LIKE_ESCAPE)
}

/// `col LIKE pattern`, wildcards in `pattern` honoured
pub fn like<C: ColumnTrait>(col: C, pattern: &str) -> SimpleExpr {
    column(col).like(LikeExpr::new(pattern))
}

/// `LOWER(col) LIKE LOWER(pattern)`, wildcards in `pattern` honoured
pub fn like_ignore_case<C: ColumnTrait>(col: C, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(column(col))).like(LikeExpr::new(pattern.to_lowercase()))
}

pub fn starts_with<C: ColumnTrait>(col: C, prefix: &str) -> SimpleExpr {
    column(col).like(escaped(format!("{}%", escape_like(prefix))))
}

pub fn ends_with<C: ColumnTrait>(col: C, suffix: &str) -> SimpleExpr {
    column(col).like(escaped(format!("%{}", escape_like(suffix))))
}

pub fn contains<C: ColumnTrait>(col: C, fragment: &str) -> SimpleExpr {
    column(col).like(escaped(format!("%{}%", escape_like(fragment))))
}

pub fn contains_ignore_case<C: ColumnTrait>(col: C, fragment: &str) -> SimpleExpr {
    Expr::expr(Func::lower(column(col)))
        .like(escaped(format!("%{}%", escape_like(&fragment.to_lowercase()))))
}

/// `LOWER(col) = LOWER(value)`
pub fn eq_ignore_case<C: ColumnTrait>(col: C, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(column(col))).eq(value.to_lowercase())
}
