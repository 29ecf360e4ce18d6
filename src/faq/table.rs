//! Built-in CivicBot knowledge base.

use crate::faq::model::{FaqEntry, FallbackRule};

pub fn builtin_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "1",
            "How do I report a civic issue?",
            "To report an issue: 1) Click the 'Report Issue' button in the navigation, 2) Select the appropriate category (potholes, streetlights, garbage, etc.), 3) Add a detailed description, 4) Use the map to select the exact location, 5) Upload photos, audio, or video if available, 6) Choose priority level, 7) Submit your report. You'll receive a unique tracking ID to monitor progress.",
            "Reporting",
            &["report", "issue", "submit", "how to", "process"],
        ),
        FaqEntry::new(
            "2",
            "How can I track my report status?",
            "You can track your reports by: 1) Clicking 'Track Progress' in the navigation, 2) Entering your report ID (e.g., #CIV-2024-001) in the search box, 3) Viewing real-time status updates including pending, acknowledged, in-progress, and resolved stages. You can also see estimated completion times and any comments from authorities.",
            "Tracking",
            &["track", "status", "progress", "monitor", "check"],
        ),
        FaqEntry::new(
            "3",
            "What types of issues can I report?",
            "You can report various civic issues including: Road problems (potholes, cracks, damage), Street lighting issues (broken lights, dark areas), Garbage and waste management problems, Graffiti and vandalism, Sidewalk and footpath issues, Traffic signal problems, Park and playground maintenance, Water supply issues, Sewage problems, and other public infrastructure concerns.",
            "Categories",
            &["types", "categories", "what", "kinds", "issues"],
        ),
        FaqEntry::new(
            "4",
            "How long does it take to resolve issues?",
            "Resolution times vary by priority: Urgent issues (safety hazards): 24-48 hours, High priority (major problems): 3-5 business days, Medium priority (moderate issues): 1-2 weeks, Low priority (minor issues): 2-4 weeks. You'll receive notifications at each stage of the process, and you can track progress in real-time.",
            "Timeline",
            &["time", "long", "duration", "when", "resolve", "fix"],
        ),
        FaqEntry::new(
            "5",
            "Can I upload photos and videos with my report?",
            "Yes! You can upload multiple photos, audio recordings, and videos to support your report. This helps authorities better understand the issue and respond more effectively. Supported formats: Photos (JPG, PNG, WebP), Audio (MP3, WAV, M4A), Video (MP4, MOV, AVI). Maximum file size is 10MB per file.",
            "Media",
            &["photos", "videos", "audio", "upload", "media", "files"],
        ),
        FaqEntry::new(
            "6",
            "How do I select the exact location for my report?",
            "You can select the location in two ways: 1) Use the interactive map to click on the exact spot, 2) Search for an address using the search box above the map. The map will automatically pin your selected location. You can also drag the pin to fine-tune the position. The coordinates will be automatically saved with your report.",
            "Location",
            &["location", "map", "address", "pin", "coordinates", "where"],
        ),
        FaqEntry::new(
            "7",
            "What if I make a mistake in my report?",
            "If you need to correct information in your report, contact our support team immediately with your report ID. We can help you update details like location, description, or priority level. However, once a report is assigned to an authority, some changes may not be possible. It's best to double-check all information before submitting.",
            "Support",
            &["mistake", "error", "wrong", "correct", "change", "edit"],
        ),
        FaqEntry::new(
            "8",
            "How do I know if my report was received?",
            "You'll receive immediate confirmation when your report is submitted, including a unique tracking ID. You'll also get email notifications (if provided) and can check the status anytime using the 'Track Progress' feature. The system will show your report as 'pending' initially, then 'acknowledged' once authorities review it.",
            "Confirmation",
            &["received", "confirmation", "submitted", "acknowledged", "status"],
        ),
        FaqEntry::new(
            "9",
            "Can I report anonymously?",
            "Yes, you can report issues anonymously. Your personal information is not required to submit a report, and you'll still receive a tracking ID to monitor progress. However, providing contact information (optional) allows authorities to reach out for clarification or updates on your report.",
            "Privacy",
            &["anonymous", "privacy", "personal", "information", "contact"],
        ),
        FaqEntry::new(
            "10",
            "What should I do if my issue is urgent or dangerous?",
            "For urgent or dangerous issues (like gas leaks, downed power lines, major road hazards), please call emergency services immediately (100 for police, 101 for fire, 102 for ambulance). You can still report these issues through our app for tracking, but don't wait for the app response in emergency situations.",
            "Emergency",
            &["urgent", "emergency", "dangerous", "immediate", "safety", "hazard"],
        ),
        FaqEntry::new(
            "11",
            "How do I view all reports in my area?",
            "Use the 'Community Map' feature to see all reported issues in your area. The map shows different colored markers for different issue types and statuses. You can filter by category, priority, or status. This helps you see what issues are already being addressed and avoid duplicate reports.",
            "Community",
            &["map", "community", "area", "nearby", "all reports", "view"],
        ),
        FaqEntry::new(
            "12",
            "What if my report is rejected or closed?",
            "If your report is rejected, you'll receive a notification explaining the reason. Common reasons include: duplicate reports, issues outside municipal jurisdiction, insufficient information, or false reports. You can submit a new report with additional details or contact support for clarification. Closed reports mean the issue has been resolved.",
            "Status",
            &["rejected", "closed", "denied", "why", "reason", "appeal"],
        ),
        FaqEntry::new(
            "13",
            "How do I contact support?",
            "You can contact our support team through: 1) The chatbot in the bottom-right corner, 2) Email us at support@jansamasya.com, 3) Call our helpline at +91 99999 99999, 4) Visit our office during business hours. We're available Monday-Friday, 9 AM to 6 PM.",
            "Support",
            &["contact", "support", "help", "phone", "email", "office"],
        ),
        FaqEntry::new(
            "14",
            "Is there a mobile app available?",
            "Currently, our service is available through this web application that works on all devices including smartphones, tablets, and computers. The web app is optimized for mobile use and provides the same features as a native app. We're working on dedicated mobile apps for iOS and Android.",
            "App",
            &["mobile", "app", "phone", "download", "ios", "android"],
        ),
        FaqEntry::new(
            "15",
            "How do I update my profile or settings?",
            "You can update your profile information by clicking on your name in the top-right corner and selecting 'Profile Settings'. Here you can update your contact information, notification preferences, and other account settings. Changes are saved automatically.",
            "Profile",
            &["profile", "settings", "update", "account", "preferences", "information"],
        ),
    ]
}

// Coverage overlaps and leaves gaps (two rules mention "map"); kept as curated.
pub fn builtin_fallback_rules() -> Vec<FallbackRule> {
    vec![
        FallbackRule::new("how.*report", "1"),
        FallbackRule::new("how.*track", "2"),
        FallbackRule::new("what.*report", "3"),
        FallbackRule::new("how.*long", "4"),
        FallbackRule::new("photo|video|audio", "5"),
        FallbackRule::new("location|map|address", "6"),
        FallbackRule::new("mistake|error|wrong", "7"),
        FallbackRule::new("received|confirmation", "8"),
        FallbackRule::new("anonymous|privacy", "9"),
        FallbackRule::new("urgent|emergency", "10"),
        FallbackRule::new("community|map|area", "11"),
        FallbackRule::new("rejected|closed", "12"),
        FallbackRule::new("contact|support|help", "13"),
        FallbackRule::new("mobile|app|phone", "14"),
        FallbackRule::new("profile|settings", "15"),
    ]
}
