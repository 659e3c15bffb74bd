use lalrpop_util::lalrpop_mod;

use crate::{ast, errors::DescriptorError};

lalrpop_mod!(
    #[allow(
        clippy::redundant_pub_crate,
        clippy::unicode_not_nfc,
        clippy::uninlined_format_args,
        clippy::no_effect_underscore_binding,
        clippy::option_if_let_else,
        clippy::use_self,
        clippy::missing_const_for_fn,
        clippy::unnested_or_patterns,
        clippy::trivially_copy_pass_by_ref,
        clippy::unnecessary_wraps,
        clippy::cloned_instead_of_copied,
        clippy::match_same_arms,
        clippy::too_many_lines
    )]
    type_literal,
    "/parser/type_literal.rs"
);

pub fn parse_type_literal(contents: &str) -> Result<ast::TypeLiteral, DescriptorError> {
    type_literal::TypeLiteralParser::new()
        .parse(contents)
        .map_err(|e| DescriptorError::InvalidTypeLiteral {
            literal: contents.to_string(),
            message: e.to_string(),
        })
}
