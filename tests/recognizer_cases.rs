//! Table-driven recognizer cases.

use declex::recognizers::{
    is_comment_line, is_function_name, is_include_line, is_variable_name,
};
use rstest::rstest;

#[rstest]
#[case("_ab3c", true)]
#[case("_loopin0x", true)]
#[case("_a3c", true)]
#[case("_a3", false)] // too short, no letter after the digit
#[case("_ab33c", false)] // two digits
#[case("ab3c", false)] // no leading underscore
#[case("_ab3c9", false)] // digit after the final letter
#[case("_3ab", false)] // digit before any letter
#[case("", false)]
fn variable_names(#[case] input: &str, #[case] accepted: bool) {
    assert_eq!(is_variable_name(input), accepted, "input: {:?}", input);
}

#[rstest]
#[case("sumFn", true)]
#[case("aFn", true)]
#[case("Fn", false)] // nothing before the suffix
#[case("sum1Fn", false)] // digit in the stem
#[case("_sumFn", false)] // underscore in the stem
#[case("sumFN", false)]
#[case("", false)]
fn function_names(#[case] input: &str, #[case] accepted: bool) {
    assert_eq!(is_function_name(input), accepted, "input: {:?}", input);
}

#[rstest]
#[case("#include<stdio.h>", true)]
#[case("#include <stdio.h>", true)]
#[case("  #include<stdio.h>  ", true)]
#[case("#include  <stdio.h>", false)] // two spaces
#[case("#include <string.h>", false)]
#[case("include<stdio.h>", false)]
fn include_lines(#[case] input: &str, #[case] accepted: bool) {
    assert_eq!(is_include_line(input), accepted, "input: {:?}", input);
}

#[rstest]
#[case("// ok comment", true)]
#[case("//", true)]
#[case("\t// tabs before and inside\tare fine", true)]
#[case("// bad!comment", false)]
#[case("// version 2", false)] // digits are punctuation here
#[case("/ half a marker", false)]
fn comment_lines(#[case] input: &str, #[case] accepted: bool) {
    assert_eq!(is_comment_line(input), accepted, "input: {:?}", input);
}
