use std::collections::HashMap;

use dlang_core::lang::keywords::{self, KeywordCategory, KeywordId};
use dlang_core::lang::operators::{self, Associativity, Fixity, OperatorId};
use dlang_core::lang::punctuation::{self, PunctuationId};

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn keyword_table_order_matches_ids() {
    // `info_for` indexes the table by discriminant.
    for (index, info) in keywords::KEYWORDS.iter().enumerate() {
        assert_eq!(info.id as usize, index, "keyword table out of order at {:?}", info.id);
    }
    for (index, info) in operators::OPERATORS.iter().enumerate() {
        assert_eq!(info.id as usize, index, "operator table out of order at {:?}", info.id);
    }
    for (index, info) in punctuation::PUNCTUATION.iter().enumerate() {
        assert_eq!(info.id as usize, index, "punctuation table out of order at {:?}", info.id);
    }
}

#[test]
fn reserved_word_set_is_complete() {
    let expected = [
        "var", "if", "then", "else", "end", "while", "for", "in", "loop", "exit", "return", "print", "func", "is",
        "not", "and", "or", "xor", "none", "int", "real", "bool", "string", "true", "false",
    ];
    assert_eq!(keywords::KEYWORDS.len(), expected.len());
    for word in expected {
        assert!(keywords::from_str(word).is_some(), "missing reserved word {word}");
    }
    assert_eq!(keywords::category(KeywordId::True), KeywordCategory::Literal);
    assert_eq!(keywords::category(KeywordId::String), KeywordCategory::Type);
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!(
                "duplicate operator spelling {:?}: {:?} and {:?}",
                info.spelling, prev, info.id
            );
        }
    }
}

#[test]
fn word_operators_are_reserved_keywords() {
    for info in operators::OPERATORS.iter().filter(|o| o.is_keyword_spelling) {
        let keyword = keywords::from_str(info.spelling);
        assert!(keyword.is_some(), "word operator {:?} is not a keyword", info.spelling);
        assert_eq!(
            keyword.map(keywords::token_name),
            Some(info.token_name),
            "token name mismatch for {:?}",
            info.id
        );
    }
}

#[test]
fn precedence_ladder_is_ordered() {
    let ladder = [
        OperatorId::Or,
        OperatorId::And,
        OperatorId::Xor,
        OperatorId::Lt,
        OperatorId::Plus,
        OperatorId::Star,
        OperatorId::Not,
        OperatorId::Is,
    ];
    for pair in ladder.windows(2) {
        assert!(
            operators::precedence(pair[0]) < operators::precedence(pair[1]),
            "{:?} must bind looser than {:?}",
            pair[0],
            pair[1]
        );
    }
    assert_eq!(operators::precedence(OperatorId::Not), operators::PREFIX_PRECEDENCE);
}

#[test]
fn comparisons_share_a_non_associative_level() {
    let comparisons = [
        OperatorId::Lt,
        OperatorId::LtEq,
        OperatorId::Gt,
        OperatorId::GtEq,
        OperatorId::Eq,
        OperatorId::NotEq,
    ];
    for id in comparisons {
        let info = operators::info_for(id);
        assert_eq!(info.precedence, 40, "{id:?}");
        assert_eq!(info.associativity, Associativity::None, "{id:?}");
        assert_eq!(info.fixity, Fixity::Infix, "{id:?}");
    }
    assert_eq!(operators::info_for(OperatorId::Is).associativity, Associativity::None);
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(
            punctuation::from_str(info.canonical),
            Some(info.id),
            "punctuation spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn token_names_are_unique_across_registries() {
    let mut seen: HashMap<&'static str, String> = HashMap::new();
    let names = keywords::KEYWORDS
        .iter()
        .map(|k| (k.token_name, format!("{:?}", k.id)))
        .chain(
            operators::OPERATORS
                .iter()
                .filter(|o| !o.is_keyword_spelling)
                .map(|o| (o.token_name, format!("{:?}", o.id))),
        )
        .chain(
            punctuation::PUNCTUATION
                .iter()
                .map(|p| (p.token_name, format!("{:?}", p.id))),
        );

    for (name, owner) in names {
        assert!(name.starts_with("TOK_"), "token name {name} lacks TOK_ prefix");
        if let Some(prev) = seen.insert(name, owner.clone()) {
            panic!("duplicate token name {name}: {prev} and {owner}");
        }
    }
}
