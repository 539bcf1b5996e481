//! Unit tests for aq-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.6139, 77.2090);
        assert_eq!(p.degree_distance(p), 0.0);
    }

    #[test]
    fn degree_distance_is_planar() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert!((a.degree_distance(b) - 5.0).abs() < 1e-12);
        assert_eq!(a.degree_distance(b), b.degree_distance(a));
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(28.5, 77.25).to_string(), "(28.500000, 77.250000)");
    }
}

#[cfg(test)]
mod severity {
    use crate::{CongestionLabel, GridSeverity, RiskCategory};

    #[test]
    fn congestion_cuts_are_exclusive_lower_bounds() {
        assert_eq!(CongestionLabel::from_severity(0), CongestionLabel::Normal);
        assert_eq!(CongestionLabel::from_severity(250), CongestionLabel::Normal);
        assert_eq!(CongestionLabel::from_severity(251), CongestionLabel::Moderate);
        assert_eq!(CongestionLabel::from_severity(300), CongestionLabel::Moderate);
        assert_eq!(CongestionLabel::from_severity(301), CongestionLabel::Heavy);
        assert_eq!(CongestionLabel::from_severity(350), CongestionLabel::Heavy);
        assert_eq!(CongestionLabel::from_severity(351), CongestionLabel::Severe);
    }

    #[test]
    fn grid_cuts() {
        assert_eq!(GridSeverity::from_severity(100), GridSeverity::Good);
        assert_eq!(GridSeverity::from_severity(101), GridSeverity::Medium);
        assert_eq!(GridSeverity::from_severity(300), GridSeverity::Medium);
        assert_eq!(GridSeverity::from_severity(301), GridSeverity::High);
        assert_eq!(GridSeverity::from_severity(400), GridSeverity::High);
        assert_eq!(GridSeverity::from_severity(401), GridSeverity::Critical);
    }

    #[test]
    fn risk_cuts() {
        assert_eq!(RiskCategory::from_severity(50), RiskCategory::Good);
        assert_eq!(RiskCategory::from_severity(51), RiskCategory::Satisfactory);
        assert_eq!(RiskCategory::from_severity(200), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_severity(300), RiskCategory::Poor);
        assert_eq!(RiskCategory::from_severity(340), RiskCategory::VeryPoor);
        assert_eq!(RiskCategory::from_severity(401), RiskCategory::Severe);
    }

    #[test]
    fn label_display() {
        assert_eq!(CongestionLabel::Heavy.to_string(), "Heavy");
        assert_eq!(GridSeverity::Critical.to_string(), "critical");
        assert_eq!(RiskCategory::VeryPoor.to_string(), "very_poor");
    }
}
