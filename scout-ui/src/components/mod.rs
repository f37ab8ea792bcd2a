//! Shared UI components

pub mod button;
pub mod collection_view;
pub mod header;
pub mod helpers;
pub mod icons;
pub mod modal;
pub mod pagination;
pub mod release_card;
pub mod release_detail_modal;
pub mod scanner_overlay;
pub mod search_view;
pub mod segmented_control;
pub mod text_input;
pub mod toast;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use collection_view::CollectionView;
pub use header::HeaderView;
pub use helpers::{CoverImage, LoadingSpinner, NoticeBanner};
pub use icons::{
    AlertTriangleIcon, BarcodeIcon, CameraIcon, ChevronLeftIcon, ChevronRightIcon, DiscIcon,
    InfoIcon, LoaderIcon, LockIcon, MusicIcon, PlusIcon, SearchIcon, TrashIcon, XIcon,
};
pub use modal::Modal;
pub use pagination::PaginationControls;
pub use release_card::ReleaseCard;
pub use release_detail_modal::ReleaseDetailModal;
pub use scanner_overlay::{ScannerOverlayView, SCANNER_VIEWPORT_ID};
pub use search_view::SearchView;
pub use segmented_control::{Segment, SegmentedControl};
pub use text_input::{TextInput, TextInputSize};
pub use toast::ToastView;
