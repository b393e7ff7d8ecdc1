use anyhow::Result;
use search_constraints::core::query_string;
use search_constraints::{
    Filter, FilterOperator, FlatDictionary, FromDictionary, Paging, SearchParameters, SortOrder,
    Sorting, ToDictionary,
};

fn dict(pairs: &[(&str, &str)]) -> FlatDictionary {
    pairs.iter().copied().collect()
}

fn canonical_parameters() -> SearchParameters {
    SearchParameters::new(
        vec![
            Filter::new(
                ["Name", "Description"],
                FilterOperator::Contains,
                Some("search".to_string()),
            ),
            Filter::with_case_sensitive(
                "Code",
                FilterOperator::Equals,
                Some("AB-01".to_string()),
                true,
            ),
            Filter::is_not_null("Email"),
            Filter::new("Age", FilterOperator::GreaterThanOrEquals, Some("18".to_string())),
            Filter::new("Notes", FilterOperator::NotContains, Some("a&b=c [x]".to_string())),
        ],
        vec![Sorting::desc("CreatedAt"), Sorting::asc("Name")],
        Some(Paging::from_page(4, 25)),
    )
}

/// Canonical inputs (unique sortings, valid paging) survive the dictionary.
#[test]
fn test_dictionary_round_trip_is_exact_for_canonical_input() {
    let params = canonical_parameters();
    let decoded = SearchParameters::from_dictionary(&params.to_dictionary());
    assert_eq!(decoded, params);
}

#[test]
fn test_query_string_round_trip_is_exact_for_canonical_input() -> Result<()> {
    let params = canonical_parameters();
    let query = params.to_query_string();
    let decoded: SearchParameters = query.parse()?;
    assert_eq!(decoded, params);
    Ok(())
}

#[test]
fn test_round_trip_drops_duplicate_sortings() {
    let params = SearchParameters::new(
        vec![],
        vec![
            Sorting::asc("Name"),
            Sorting::desc("Name"),
            Sorting::desc("Age"),
        ],
        None,
    );

    let decoded = SearchParameters::from_query_string(&params.to_query_string());
    assert_eq!(decoded.sortings(), &[Sorting::asc("Name"), Sorting::desc("Age")]);
}

#[test]
fn test_decode_of_encoded_dictionary_matches_direct_decode() {
    let input = dict(&[
        ("filters[0][fields]", "Name,Last Name"),
        ("filters[0][op]", "neq"),
        ("filters[0][val]", "100% & more"),
        ("filters[3][fields]", "Status"),
        ("filters[3][op]", "null"),
        ("sortings[1][prop]", "Name"),
        ("sortings[1][ord]", "desc"),
        ("skip", "0"),
        ("take", "50"),
    ]);

    let through_query = query_string::decode(&query_string::encode(&input));
    assert_eq!(
        SearchParameters::from_dictionary(&through_query),
        SearchParameters::from_dictionary(&input)
    );
}

#[test]
fn test_sorting_duplicate_serializes_first_only() {
    let params = SearchParameters::new(
        vec![],
        vec![
            Sorting::new("Name", SortOrder::Ascending),
            Sorting::new("Name", SortOrder::Descending),
        ],
        None,
    );

    let out = params.to_dictionary();
    assert_eq!(
        out,
        dict(&[("sortings[0][prop]", "Name"), ("sortings[0][ord]", "asc")])
    );
}

#[test]
fn test_paging_all_or_nothing() {
    let only_skip = SearchParameters::from_dictionary(&dict(&[("skip", "10")]));
    assert!(only_skip.paging().is_none());

    let both = SearchParameters::from_dictionary(&dict(&[("skip", "10"), ("take", "20")]));
    assert_eq!(both.paging(), Some(&Paging::from_skip_take(10, 20)));

    let unparseable = SearchParameters::from_dictionary(&dict(&[("skip", "10"), ("take", "x")]));
    assert!(unparseable.paging().is_none());
}

#[test]
fn test_multi_field_filter_without_case_key() {
    let filter = Filter::with_case_sensitive(
        vec!["Name", "Description"],
        FilterOperator::Contains,
        Some("search".to_string()),
        false,
    );

    assert_eq!(
        filter.to_dictionary(),
        dict(&[
            ("fields", "Name,Description"),
            ("op", "contains"),
            ("val", "search"),
        ])
    );
}

#[test]
fn test_search_with_page_two_serializes_skip_and_filter() {
    let params = SearchParameters::new(
        vec![Filter::new("Name", FilterOperator::Contains, Some("Franco".to_string()))],
        vec![],
        Some(Paging::from_page(2, 10)),
    );

    let query = params.to_query_string();
    assert!(query.contains("skip=10&take=10"));
    assert!(query.contains(
        "filters%5B0%5D%5Bfields%5D=Name&filters%5B0%5D%5Bop%5D=contains&filters%5B0%5D%5Bval%5D=Franco"
    ));

    let decoded = query_string::decode(&query);
    assert_eq!(decoded.get("filters[0][fields]"), Some("Name"));
    assert_eq!(decoded.get("filters[0][op]"), Some("contains"));
    assert_eq!(decoded.get("filters[0][val]"), Some("Franco"));
    assert_eq!(decoded.get("skip"), Some("10"));
    assert_eq!(decoded.get("take"), Some("10"));
}

#[test]
fn test_parse_raw_query_string() {
    let params = SearchParameters::from_query_string(
        "filters[0][fields]=Name&filters[0][op]=contains&filters[0][val]=test&skip=5&take=10",
    );

    assert_eq!(params.filters().len(), 1);
    let filter = &params.filters()[0];
    assert_eq!(filter.fields(), &["Name".to_string()]);
    assert_eq!(filter.operator(), &FilterOperator::Contains);
    assert_eq!(filter.value(), Some("test"));
    assert_eq!(params.paging(), Some(&Paging::from_skip_take(5, 10)));
    assert!(params.sortings().is_empty());
}

#[test]
fn test_unary_filter_never_carries_val_on_the_wire() {
    let params = SearchParameters::from_query_string(
        "filters[0][fields]=DeletedAt&filters[0][op]=null&filters[0][val]=oops",
    );

    assert_eq!(params.filters()[0].value(), None);
    assert!(!params.to_dictionary().contains_key("filters[0][val]"));
}

#[test]
fn test_empty_input_decodes_to_empty_parameters() {
    let params = SearchParameters::from_query_string("");
    assert!(params.is_empty());
    assert_eq!(params.to_query_string(), "");
}

#[test]
fn test_unrecognised_codes_survive_decode_and_re_encode() {
    let params = SearchParameters::from_query_string(
        "filters[0][fields]=Name&filters[0][op]=like&filters[0][val]=Fran%25\
         &sortings[0][prop]=Name&sortings[0][ord]=random",
    );

    let out = params.to_dictionary();
    assert_eq!(out.get("filters[0][op]"), Some("like"));
    assert_eq!(out.get("filters[0][val]"), Some("Fran%"));
    assert_eq!(out.get("sortings[0][ord]"), Some("random"));
    assert_eq!(SearchParameters::from_dictionary(&out), params);
}

#[test]
fn test_negative_paging_is_decoded_not_dropped() {
    let params = SearchParameters::from_query_string("skip=-5&take=10");
    assert_eq!(params.paging(), Some(&Paging::from_skip_take(-5, 10)));
    assert_eq!(params.to_query_string(), "skip=-5&take=10");
}
