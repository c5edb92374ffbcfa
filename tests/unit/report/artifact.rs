use super::*;

#[test]
fn file_names_match_the_report_set() {
    let names: Vec<&str> = Artifact::ALL.iter().map(|a| a.file_name()).collect();
    assert_eq!(
        names,
        [
            "skyron_revenue.png",
            "skyron_investment.png",
            "skyron_margin_cash.png",
            "skyron_cac_ltv.png",
            "skyron_payback.png",
            "skyron_animated_revenue.gif",
            "skyron_margin_sensitivity.png",
        ]
    );
}

#[test]
fn only_the_revenue_animation_is_animated() {
    let animated: Vec<Artifact> = Artifact::ALL
        .into_iter()
        .filter(|a| a.is_animated())
        .collect();
    assert_eq!(animated, [Artifact::AnimatedRevenue]);
}

#[test]
fn parses_slug_and_file_name() {
    assert_eq!("margin-cash".parse::<Artifact>().unwrap(), Artifact::MarginCash);
    assert_eq!(" CAC-LTV ".parse::<Artifact>().unwrap(), Artifact::CacLtv);
    assert_eq!(
        "skyron_animated_revenue.gif".parse::<Artifact>().unwrap(),
        Artifact::AnimatedRevenue
    );
}

#[test]
fn unknown_artifact_lists_known_slugs() {
    let err = "pie".parse::<Artifact>().unwrap_err();
    assert!(err.to_string().contains("unknown artifact 'pie'"));
    assert!(err.to_string().contains("margin-sensitivity"));
}

#[test]
fn display_round_trips_through_from_str() {
    for a in Artifact::ALL {
        assert_eq!(a.to_string().parse::<Artifact>().unwrap(), a);
    }
}

#[test]
fn all_is_sorted_in_render_order() {
    let mut sorted = Artifact::ALL.to_vec();
    sorted.sort();
    assert_eq!(sorted, Artifact::ALL);
}
