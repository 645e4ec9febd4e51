//! # Lox-Scanner - the scanning phase of Crafting Interpreters' Lox programming language
//!
//! This crate turns Lox source text into the token stream a parser consumes,
//! and nothing more: parsing and evaluation live elsewhere. The scanner follows
//! the [Scanning](https://craftinginterpreters.com/scanning.html) chapter of the
//! book[^1], and adds the extensions listed below.
//!
//! ## Usage
//!
//! ```rust
//! use lox_scanner::lox::token::lexer::Lexer;
//! use lox_scanner::lox::token::lexer::LexingError;
//!
//! let mut errors: Vec<LexingError> = Vec::new();
//! let tokens = Lexer::new("print \"Hello, World!\";", &mut errors).scan_tokens();
//! assert!(errors.is_empty());
//! assert_eq!(tokens.len(), 4);
//! ```
//!
//! A scan never fails outright. Malformed lexemes are handed to an
//! [`ErrorReporter`](lox::errors::ErrorReporter) and skipped, and the caller
//! decides afterwards whether the tokens are good enough to parse.
//! [`tokenize`](lox::token::lexer::tokenize) packages the common "only if there
//! were no errors" policy.
//!
//! ## Extensions
//!
//! - Block comments `/* ... */` are supported and nest: every `/*` needs its
//!   own `*/`. By default an unclosed comment silently runs to the end of the
//!   input; [`ScanOptions`](lox::token::lexer::ScanOptions) can have it reported.
//! - Tokens can be rendered in the reference implementation's
//!   `TYPE lexeme literal` format via [`LoxStdDisplay`](lox::display::LoxStdDisplay).
//! - The bundled binary has preliminary support for multi-line REPL input:
//!   errors caused purely by unterminated input ask for a continuation line
//!   instead of being raised. [`ReplInput`](lox::repl::ReplInput) makes that call.
//!
//! ## Logging
//!
//! The scanner emits [`tracing`] events: a `debug` summary per scan and per
//! reported error, and a `trace` event per token. Installing a subscriber is
//! left to the application.
//!
//! [^1]: <https://craftinginterpreters.com/>
#![deny(
    warnings,
)]
#![deny(
    future_incompatible,
    keyword_idents,
    let_underscore,
    nonstandard_style,
    refining_impl_trait,
)]
#![deny(
    rust_2018_compatibility,
    rust_2021_compatibility,
    rust_2024_compatibility,
)]
#![deny(
    clippy::all,
    clippy::pedantic,
)]
#![deny(
    clippy::absolute_paths,
    clippy::alloc_instead_of_core,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::arithmetic_side_effects,
    clippy::as_conversions,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    clippy::cfg_not_test,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::default_numeric_fallback,
    clippy::deref_by_slicing,
    clippy::disallowed_script_idents,
    clippy::else_if_without_else,
    clippy::empty_drop,
    clippy::empty_enum_variants_with_brackets,
    clippy::empty_structs_with_brackets,
    clippy::error_impl_error,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::field_scoped_visibility_modifiers,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::impl_trait_in_params,
    clippy::indexing_slicing,
    clippy::infinite_loop,
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    clippy::iter_over_hash_type,
    clippy::large_include_file,
    clippy::let_underscore_must_use,
    clippy::let_underscore_untyped,
    clippy::lossy_float_literal,
    clippy::map_err_ignore,
    clippy::mem_forget,
    clippy::min_ident_chars,
    clippy::missing_asserts_for_indexing,
    clippy::missing_docs_in_private_items,
    clippy::missing_inline_in_public_items,
    clippy::missing_trait_methods,
    clippy::mixed_read_write_in_expression,
    clippy::module_name_repetitions,
    clippy::modulo_arithmetic,
    clippy::multiple_inherent_impl,
    clippy::multiple_unsafe_ops_per_block,
    clippy::needless_raw_strings,
    clippy::non_ascii_literal,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::partial_pub_fields,
    clippy::pattern_type_mismatch,
    clippy::pub_with_shorthand,
    clippy::pub_without_shorthand,
    clippy::redundant_type_annotations,
    clippy::renamed_function_params,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::same_name_method,
    clippy::self_named_module_files,
    clippy::semicolon_inside_block,
    clippy::semicolon_outside_block,
    clippy::separated_literal_suffix,
    clippy::single_char_lifetime_names,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_lit_chars_any,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::suspicious_xor_used_as_pow,
    clippy::tests_outside_test_module,
    clippy::todo,
    clippy::try_err,
    clippy::undocumented_unsafe_blocks,
    clippy::unimplemented,
    clippy::unnecessary_safety_comment,
    clippy::unnecessary_safety_doc,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::unreachable,
    clippy::unused_result_ok,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::verbose_file_reads,
    clippy::wildcard_enum_match_arm
)]
#![warn(unused)]
#![allow(
    edition_2024_expr_fragment_specifier,
    reason = "the map! macro expects the 2024 edition behaviour."
)]
pub mod lox;
