/// Trimmed-down MessageAI project.pbxproj carrying all four anchors
pub(crate) const PROJECT_FIXTURE: &str = "// !$*UTF8*$!\n\
{\n\
\tarchiveVersion = 1;\n\
\tobjectVersion = 77;\n\
\tobjects = {\n\
\n\
/* Begin PBXBuildFile section */\n\
\t\tA52EBF602EA85C3D008D65D8 /* FirebaseAuth in Frameworks */ = {isa = PBXBuildFile; productRef = A5FB00012EA8300000000001 /* FirebaseAuth */; };\n\
\t\tA52EBF622EA85C3D008D65D8 /* FirebaseAnalytics in Frameworks */ = {isa = PBXBuildFile; productRef = A5FB00052EA8300000000005 /* FirebaseAnalytics */; };\n\
/* End PBXBuildFile section */\n\
\n\
/* Begin PBXFrameworksBuildPhase section */\n\
\t\tA5C0FFEE2EA8300000000010 /* Frameworks */ = {\n\
\t\t\tisa = PBXFrameworksBuildPhase;\n\
\t\t\tbuildActionMask = 2147483647;\n\
\t\t\tfiles = (\n\
\t\t\t\tA52EBF602EA85C3D008D65D8 /* FirebaseAuth in Frameworks */,\n\
\t\t\t\tA52EBF622EA85C3D008D65D8 /* FirebaseAnalytics in Frameworks */,\n\
\t\t\t);\n\
\t\t\trunOnlyForDeploymentPostprocessing = 0;\n\
\t\t};\n\
/* End PBXFrameworksBuildPhase section */\n\
\n\
/* Begin PBXNativeTarget section */\n\
\t\tA5C0FFEE2EA8300000000020 /* MessageAI */ = {\n\
\t\t\tisa = PBXNativeTarget;\n\
\t\t\tname = MessageAI;\n\
\t\t\tpackageProductDependencies = (\n\
\t\t\t\tA5FB00012EA8300000000001 /* FirebaseAuth */,\n\
\t\t\t\tA5FB00022EA8300000000002 /* FirebaseFirestore */,\n\
\t\t\t\tA5FB00042EA8300000000004 /* FirebaseMessaging */,\n\
\t\t\t\tA5FB00052EA8300000000005 /* FirebaseAnalytics */,\n\
\t\t\t);\n\
\t\t\tproductName = MessageAI;\n\
\t\t};\n\
/* End PBXNativeTarget section */\n\
\n\
/* Begin XCSwiftPackageProductDependency section */\n\
\t\tA5FB00012EA8300000000001 /* FirebaseAuth */ = {\n\
\t\t\tisa = XCSwiftPackageProductDependency;\n\
\t\t\tpackage = A5FB00002EA8300000000000 /* XCRemoteSwiftPackageReference \"firebase-ios-sdk\" */;\n\
\t\t\tproductName = FirebaseAuth;\n\
\t\t};\n\
\t\tA5FB00052EA8300000000005 /* FirebaseAnalytics */ = {\n\
\t\t\tisa = XCSwiftPackageProductDependency;\n\
\t\t\tpackage = A5FB00002EA8300000000000 /* XCRemoteSwiftPackageReference \"firebase-ios-sdk\" */;\n\
\t\t\tproductName = FirebaseAnalytics;\n\
\t\t};\n\
/* End XCSwiftPackageProductDependency section */\n\
\t};\n\
\trootObject = A5C0FFEE2EA8300000000000 /* Project object */;\n\
}\n";
