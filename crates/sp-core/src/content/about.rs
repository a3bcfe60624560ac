//! Content for the about page.

pub const PROBLEM_STATEMENT: &str = "The Employee Salary Prediction application addresses a \
critical challenge in HR analytics: accurately classifying whether an employee's salary falls \
above or below the $50,000 threshold based on demographic and professional attributes.";

pub const BUSINESS_APPLICATIONS: [&str; 4] = [
    "Compensation planning and budget forecasting",
    "Pay equity analysis across demographics",
    "Recruitment strategy optimization",
    "Performance evaluation correlation",
];

pub const ORGANIZATIONAL_BENEFITS: [&str; 4] = [
    "Data-driven HR decision making",
    "Reduced bias in compensation",
    "Regulatory compliance support",
    "Strategic workforce insights",
];

#[derive(Debug, Clone, Copy)]
pub struct Technology {
    pub name: &'static str,
    pub description: &'static str,
}

pub const TECHNOLOGIES: [Technology; 8] = [
    Technology {
        name: "Python",
        description: "Core programming language for ML development",
    },
    Technology {
        name: "scikit-learn",
        description: "Machine learning library for model training",
    },
    Technology {
        name: "pandas",
        description: "Data manipulation and analysis",
    },
    Technology {
        name: "numpy",
        description: "Numerical computing operations",
    },
    Technology {
        name: "matplotlib",
        description: "Data visualization and plotting",
    },
    Technology {
        name: "React",
        description: "Frontend framework for user interface",
    },
    Technology {
        name: "TypeScript",
        description: "Type-safe JavaScript development",
    },
    Technology {
        name: "Tailwind CSS",
        description: "Utility-first CSS framework",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct WorkflowStep {
    pub step: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
}

pub const WORKFLOW: [WorkflowStep; 5] = [
    WorkflowStep {
        step: 1,
        title: "Data Collection",
        description: "Adult Census Income dataset from UCI ML Repository",
        details: "32,561 records with 15 attributes including age, education, occupation, and \
                  income level",
    },
    WorkflowStep {
        step: 2,
        title: "Data Preprocessing",
        description: "Clean and prepare data for machine learning",
        details: "Handle missing values, encode categorical variables, and scale numerical \
                  features",
    },
    WorkflowStep {
        step: 3,
        title: "Model Training",
        description: "Train Random Forest classifier with hyperparameter tuning",
        details: "Use GridSearchCV for optimal parameters and 5-fold cross-validation",
    },
    WorkflowStep {
        step: 4,
        title: "Model Evaluation",
        description: "Assess performance using multiple metrics",
        details: "Accuracy, precision, recall, F1-score, and ROC-AUC analysis",
    },
    WorkflowStep {
        step: 5,
        title: "Deployment",
        description: "Deploy model with web interface for predictions",
        details: "RESTful API with React frontend for real-time salary predictions",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct KeyResult {
    pub value: &'static str,
    pub label: &'static str,
}

pub const KEY_RESULTS: [KeyResult; 4] = [
    KeyResult {
        value: "87.2%",
        label: "Overall Accuracy",
    },
    KeyResult {
        value: "82%",
        label: "Precision (>$50K)",
    },
    KeyResult {
        value: "78%",
        label: "Recall (>$50K)",
    },
    KeyResult {
        value: "0.89",
        label: "ROC-AUC Score",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SampleExample {
    pub title: &'static str,
    pub input: &'static str,
    pub outcome: &'static str,
}

pub const SAMPLE_EXAMPLES: [SampleExample; 2] = [
    SampleExample {
        title: "High Salary Prediction:",
        input: "Input: Age=39, Education=Masters, Occupation=Tech-support, Hours=40",
        outcome: "Prediction: Salary > $50K (Probability: 73%)",
    },
    SampleExample {
        title: "Low Salary Prediction:",
        input: "Input: Age=23, Education=HS-grad, Occupation=Handlers-cleaners, Hours=30",
        outcome: "Prediction: Salary \u{2264} $50K (Probability: 91%)",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct EnhancementGroup {
    pub category: &'static str,
    pub items: [&'static str; 4],
}

pub const FUTURE_ENHANCEMENTS: [EnhancementGroup; 4] = [
    EnhancementGroup {
        category: "Model Improvements",
        items: [
            "Deep learning models (Neural Networks)",
            "Ensemble methods with model stacking",
            "Real-time learning with new data",
            "Advanced feature engineering",
        ],
    },
    EnhancementGroup {
        category: "System Integration",
        items: [
            "HRIS system integration",
            "RESTful API development",
            "Mobile application support",
            "Cloud deployment (AWS/Azure)",
        ],
    },
    EnhancementGroup {
        category: "Bias & Fairness",
        items: [
            "Algorithmic bias detection",
            "Demographic parity metrics",
            "Explainable AI with SHAP values",
            "Comprehensive audit trails",
        ],
    },
    EnhancementGroup {
        category: "Additional Features",
        items: [
            "Geographic salary variations",
            "Industry trend analysis",
            "Skills assessment integration",
            "Performance metric correlation",
        ],
    },
];

pub const PRIMARY_DATASET_REFERENCES: [&str; 3] = [
    "UCI Adult Dataset: Adult Census Income dataset",
    "Original Study: Kohavi, R. (1996). Scaling Up the Accuracy of Naive-Bayes Classifiers",
    "Archive: https://archive.ics.uci.edu/ml/datasets/adult",
];

pub const TECHNICAL_REFERENCES: [&str; 3] = [
    "Scikit-learn Documentation: https://scikit-learn.org/",
    "Random Forest Algorithm: Breiman, L. (2001). Random Forests",
    "Pandas Documentation: https://pandas.pydata.org/",
];

pub const COMPLIANCE_NOTES: [&str; 3] = [
    "Fair Credit Reporting Act (FCRA): Guidelines for employment screening",
    "Equal Employment Opportunity Commission (EEOC): Anti-discrimination regulations",
    "General Data Protection Regulation (GDPR): Data privacy compliance",
];
