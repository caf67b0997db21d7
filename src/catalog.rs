//! Static gallery content for the project cards.
//!
//! Entries are keyed by [`ProjectId`] so card markup can reference a project
//! without depending on its heading text. [`open_gallery_content`] keeps the
//! title-based lookup for callers that only have the rendered heading.

pub const PLACEHOLDER_TEXT: &str = "No images available for this project yet.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectId {
    WaterMeter,
    AuditPortal,
    SciLab,
    PlspCart,
}

impl ProjectId {
    pub const ALL: [ProjectId; 4] = [
        Self::WaterMeter,
        Self::AuditPortal,
        Self::SciLab,
        Self::PlspCart,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::WaterMeter => "Water Meter Management System",
            Self::AuditPortal => "Audit Portal",
            Self::SciLab => "SciLab Reservation System",
            Self::PlspCart => "PLSPCart – E-Commerce Platform",
        }
    }

    /// Exact match against the display title.
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.title() == title)
    }

    pub fn entry(self) -> &'static CatalogEntry {
        match self {
            Self::WaterMeter => &WATER_METER,
            Self::AuditPortal => &AUDIT_PORTAL,
            Self::SciLab => &SCILAB,
            Self::PlspCart => &PLSPCART,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ImageGroup {
    pub label: &'static str,
    pub images: &'static [GalleryImage],
}

#[derive(Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub notice: Option<&'static str>,
    pub groups: &'static [ImageGroup],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryContent {
    Entry(&'static CatalogEntry),
    Placeholder,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryView {
    pub title: String,
    pub content: GalleryContent,
}

impl GalleryView {
    pub fn for_project(id: ProjectId) -> Self {
        Self {
            title: id.title().to_string(),
            content: GalleryContent::Entry(id.entry()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, GalleryContent::Placeholder)
    }
}

/// Resolves a card heading to its gallery. Unknown titles get the placeholder
/// under their own heading.
pub fn open_gallery_content(title: &str) -> GalleryView {
    let title = title.trim();
    match ProjectId::from_title(title) {
        Some(id) => GalleryView::for_project(id),
        None => GalleryView {
            title: title.to_string(),
            content: GalleryContent::Placeholder,
        },
    }
}

const fn image(src: &'static str, alt: &'static str) -> GalleryImage {
    GalleryImage { src, alt }
}

static WATER_METER: CatalogEntry = CatalogEntry {
    notice: None,
    groups: &[
        ImageGroup {
            label: "Admin Panel",
            images: &[
                image("img/Water-Works/admin/login.jpg", "Login"),
                image("img/Water-Works/admin/consumer_list.jpg", "Consumer List"),
                image("img/Water-Works/admin/consumer_info.jpg", "Consumer Info"),
                image("img/Water-Works/admin/meter_connection.jpg", "Meter Connection"),
                image("img/Water-Works/admin/reading.jpg", "Reading"),
                image("img/Water-Works/admin/charges.jpg", "Charges"),
                image("img/Water-Works/admin/posting.jpg", "Posting"),
                image("img/Water-Works/admin/bills_and_payment.jpg", "Bills and Payment"),
                image("img/Water-Works/admin/billing_summary.jpg", "Billing Summary"),
                image("img/Water-Works/admin/analytics.jpg", "Analytics"),
                image("img/Water-Works/admin/user_management.jpg", "User Management"),
                image("img/Water-Works/admin/brgy_list.jpg", "Brgy List"),
            ],
        },
        ImageGroup {
            label: "Reader Portal",
            images: &[
                image("img/Water-Works/reader/homepage.jpg", "Homepage"),
                image("img/Water-Works/reader/dashboard.jpg", "Dashboard"),
                image("img/Water-Works/reader/list_of_consumers.jpg", "List of Consumers"),
                image("img/Water-Works/reader/readingpage.jpg", "Reading Page"),
            ],
        },
        ImageGroup {
            label: "Consumer Portal",
            images: &[
                image("img/Water-Works/consumer/login.jpg", "Consumer Login"),
                image("img/Water-Works/consumer/homepage.jpg", "Consumer Homepage"),
            ],
        },
    ],
};

static AUDIT_PORTAL: CatalogEntry = CatalogEntry {
    notice: Some(
        "Screenshots of the live system are unavailable due to company policy. \
         The images shown are photos taken during development/deployment.",
    ),
    groups: &[ImageGroup {
        label: "System Screenshots",
        images: &[
            image("img/audit-portal/homepage.jpg", "Homepage"),
            image("img/audit-portal/fyp.jpg", "FYP"),
            image("img/audit-portal/fyp1.jpg", "FYP 1"),
            image("img/audit-portal/meeting.jpg", "Meeting"),
            image("img/audit-portal/meeting1.jpg", "Meeting 1"),
            image("img/audit-portal/leaderboard.jpg", "Leaderboard"),
            image("img/audit-portal/proffilepage.jpg", "Profile Page"),
        ],
    }],
};

static SCILAB: CatalogEntry = CatalogEntry {
    notice: None,
    groups: &[
        ImageGroup {
            label: "Admin Dashboard",
            images: &[
                image("img/SciLab/admin/dashboard.png", "Dashboard"),
                image("img/SciLab/admin/inventory_admin.png", "Inventory"),
                image("img/SciLab/admin/manage_professor_admin.png", "Manage Professor"),
                image("img/SciLab/admin/ongoing_reservation_admin.png", "Ongoing Reservations"),
                image("img/SciLab/admin/professor_approval_admin.png", "Professor Approval"),
                image("img/SciLab/admin/reserve_history_admin.png", "Reserve History"),
                image("img/SciLab/admin/room_monitor_admin.png", "Room Monitor"),
                image("img/SciLab/admin/student_approval_admin.png", "Student Approval"),
                image("img/SciLab/admin/unreturned_item_admin.png", "Unreturned Items"),
            ],
        },
        ImageGroup {
            label: "Professor Portal",
            images: &[
                image("img/SciLab/professor/dashboard_student_professor.png", "Dashboard"),
                image("img/SciLab/professor/history_professor.png", "History"),
                image("img/SciLab/professor/pending_professor.png", "Pending"),
                image("img/SciLab/professor/reservation_professor.png", "Reservation"),
                image("img/SciLab/professor/students_with_unra.png", "Students with Unreturned"),
                image("img/SciLab/professor/student_approval_professor.png", "Student Approval"),
                image("img/SciLab/professor/student_approved_professor.png", "Student Approved"),
            ],
        },
        ImageGroup {
            label: "Student Portal",
            images: &[
                image("img/SciLab/student/ladningpage.png", "Landing Page"),
                image("img/SciLab/student/login.png", "Login"),
                image("img/SciLab/student/register.png", "Register"),
                image("img/SciLab/student/createreserve.png", "Create Reservation"),
                image("img/SciLab/student/reservation.png", "Reservation"),
                image("img/SciLab/student/pendingapproval.png", "Pending Approval"),
                image("img/SciLab/student/history.png", "History"),
            ],
        },
    ],
};

static PLSPCART: CatalogEntry = CatalogEntry {
    notice: None,
    groups: &[
        ImageGroup {
            label: "Admin Dashboard",
            images: &[
                image("img/plspcart/admin/Screenshot 2026-02-07 000636.png", "Admin 1"),
                image("img/plspcart/admin/Screenshot 2026-02-07 000640.png", "Admin 2"),
                image("img/plspcart/admin/Screenshot 2026-02-07 000643.png", "Admin 3"),
                image("img/plspcart/admin/Screenshot 2026-02-07 000647.png", "Admin 4"),
                image("img/plspcart/admin/Screenshot 2026-02-07 000651.png", "Admin 5"),
                image("img/plspcart/admin/Screenshot 2026-02-07 000700.png", "Admin 6"),
                image("img/plspcart/admin/Screenshot 2026-02-07 000704.png", "Admin 7"),
            ],
        },
        ImageGroup {
            label: "Buyer Platform",
            images: &[
                image("img/plspcart/buyer/Screenshot 2026-02-07 000006.png", "Buyer 1"),
                image("img/plspcart/buyer/Screenshot 2026-02-07 000011.png", "Buyer 2"),
                image("img/plspcart/buyer/Screenshot 2026-02-07 000017.png", "Buyer 3"),
                image("img/plspcart/buyer/Screenshot 2026-02-07 000023.png", "Buyer 4"),
                image("img/plspcart/buyer/Screenshot 2026-02-07 000032.png", "Buyer 5"),
                image("img/plspcart/buyer/Screenshot 2026-02-07 000035.png", "Buyer 6"),
                image("img/plspcart/buyer/Screenshot 2026-02-07 000342.png", "Buyer 7"),
                image("img/plspcart/buyer/Screenshot 2026-02-07 000346.png", "Buyer 8"),
                image("img/plspcart/buyer/Screenshot 2026-02-07 000356.png", "Buyer 9"),
                image("img/plspcart/buyer/Screenshot 2026-02-07 000414.png", "Buyer 10"),
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn group_labels(view: &GalleryView) -> Vec<&'static str> {
        match view.content {
            GalleryContent::Entry(entry) => entry.groups.iter().map(|group| group.label).collect(),
            GalleryContent::Placeholder => Vec::new(),
        }
    }

    #[test]
    fn water_meter_title_renders_three_portals() {
        let view = open_gallery_content("Water Meter Management System");
        assert_eq!(
            group_labels(&view),
            vec!["Admin Panel", "Reader Portal", "Consumer Portal"]
        );
        assert_eq!(view, open_gallery_content("Water Meter Management System"));
    }

    #[test]
    fn unknown_title_renders_placeholder() {
        let view = open_gallery_content("unknown-title");
        assert!(view.is_placeholder());
        assert_eq!(view.title, "unknown-title");
    }

    #[test]
    fn lookup_is_exact_after_trimming() {
        assert!(!open_gallery_content("  Audit Portal\n").is_placeholder());
        assert!(open_gallery_content("audit portal").is_placeholder());
        assert!(open_gallery_content("PLSPCart - E-Commerce Platform").is_placeholder());
    }

    #[test]
    fn every_project_round_trips_through_its_title() {
        for id in ProjectId::ALL {
            assert_eq!(ProjectId::from_title(id.title()), Some(id));
            assert!(!id.entry().groups.is_empty());
        }
    }

    #[test]
    fn group_sizes_match_published_galleries() {
        let sizes = |id: ProjectId| -> Vec<usize> {
            id.entry().groups.iter().map(|group| group.images.len()).collect()
        };

        assert_eq!(sizes(ProjectId::WaterMeter), vec![12, 4, 2]);
        assert_eq!(sizes(ProjectId::AuditPortal), vec![7]);
        assert_eq!(sizes(ProjectId::SciLab), vec![9, 7, 7]);
        assert_eq!(sizes(ProjectId::PlspCart), vec![7, 10]);
    }

    #[test]
    fn only_audit_portal_carries_a_notice() {
        for id in ProjectId::ALL {
            assert_eq!(id.entry().notice.is_some(), id == ProjectId::AuditPortal);
        }
    }
}
