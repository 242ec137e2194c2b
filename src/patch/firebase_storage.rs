//! The four insertions that wire `FirebaseStorage` into the MessageAI target.
//!
//! All identifiers belong to the existing `firebase-ios-sdk` package reference
//! (`A5FB00002EA8300000000000`). The new product is `A5FB00062EA8300000000006`
//! and its build file is `A52EBF632EA85C3D008D65D8`.

use super::{Anchor, PatchPlan};
use crate::error::Result;

pub const PLAN_NAME: &str = "firebase-storage";

const PACKAGE_PRODUCT_DEPENDENCY: &str = r"packageProductDependencies = \(\s+A5FB00012EA8300000000001 /\* FirebaseAuth \*/,\s+A5FB00022EA8300000000002 /\* FirebaseFirestore \*/,\s+A5FB00042EA8300000000004 /\* FirebaseMessaging \*/,\s+A5FB00052EA8300000000005 /\* FirebaseAnalytics \*/,";

const PACKAGE_PRODUCT_DEPENDENCY_LINE: &str =
    "\n\t\t\t\tA5FB00062EA8300000000006 /* FirebaseStorage */,";

const SWIFT_PACKAGE_PRODUCT: &str = r#"A5FB00052EA8300000000005 /\* FirebaseAnalytics \*/ = \{\s+isa = XCSwiftPackageProductDependency;\s+package = A5FB00002EA8300000000000 /\* XCRemoteSwiftPackageReference "firebase-ios-sdk" \*/;\s+productName = FirebaseAnalytics;\s+\};"#;

const SWIFT_PACKAGE_PRODUCT_BLOCK: &str = "\n\
\t\tA5FB00062EA8300000000006 /* FirebaseStorage */ = {\n\
\t\t\tisa = XCSwiftPackageProductDependency;\n\
\t\t\tpackage = A5FB00002EA8300000000000 /* XCRemoteSwiftPackageReference \"firebase-ios-sdk\" */;\n\
\t\t\tproductName = FirebaseStorage;\n\
\t\t};";

const PBX_BUILD_FILE: &str = r"A52EBF622EA85C3D008D65D8 /\* FirebaseAnalytics in Frameworks \*/ = \{isa = PBXBuildFile; productRef = A5FB00052EA8300000000005 /\* FirebaseAnalytics \*/; \};";

const PBX_BUILD_FILE_LINE: &str = "\n\t\tA52EBF632EA85C3D008D65D8 /* FirebaseStorage in Frameworks */ = {isa = PBXBuildFile; productRef = A5FB00062EA8300000000006 /* FirebaseStorage */; };";

const FRAMEWORKS_PHASE: &str = r"A52EBF622EA85C3D008D65D8 /\* FirebaseAnalytics in Frameworks \*/,";

const FRAMEWORKS_PHASE_LINE: &str =
    "\n\t\t\t\tA52EBF632EA85C3D008D65D8 /* FirebaseStorage in Frameworks */,";

/// Build the plan. Order matters only for logging; the anchors are disjoint.
pub fn firebase_storage_plan() -> Result<PatchPlan> {
    let anchors = vec![
        Anchor::new(
            "package-product-dependency",
            PACKAGE_PRODUCT_DEPENDENCY,
            PACKAGE_PRODUCT_DEPENDENCY_LINE,
        )?,
        Anchor::new(
            "swift-package-product",
            SWIFT_PACKAGE_PRODUCT,
            SWIFT_PACKAGE_PRODUCT_BLOCK,
        )?,
        Anchor::new("pbx-build-file", PBX_BUILD_FILE, PBX_BUILD_FILE_LINE)?,
        Anchor::new("frameworks-phase", FRAMEWORKS_PHASE, FRAMEWORKS_PHASE_LINE)?,
    ];

    Ok(PatchPlan::new(PLAN_NAME, anchors))
}
