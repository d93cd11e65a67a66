pub const NAME: &str = "Praveen A";
pub const BRAND: &str = "PRAVEEN A";
pub const TITLE: &str = "Aspiring Cloud and DevOps Engineer";
pub const TAGLINE: &str = "Pursuing B.Tech in Information Technology with a passion for cloud and DevOps, automation, and scalable system design. Currently at an intermediate level and eager to contribute to innovative projects while growing skills in the DevOps field";

pub const PROFILE_PHOTO: &str = "/assets/profile-photo.png";
pub const HERO_BACKGROUND: &str = "/assets/hero-bg.jpg";
pub const RESUME_HREF: &str = "/Praveen A-Resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Praveen_A_Resume.pdf";
pub const GITHUB_HREF: &str = "https://github.com/praveen28-devops";

#[derive(Debug, PartialEq)]
pub struct Contact {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

impl Contact {
    pub fn short_label(&self) -> &'static str {
        self.label.split(' ').next().unwrap_or(self.label)
    }
}

pub const CONTACTS: &[Contact] = &[
    Contact {
        icon: "📍",
        label: "Namakkal, Tamil Nadu, India",
        href: "https://maps.app.goo.gl/TmHd9zgFyMdSK8Kc7",
    },
    Contact {
        icon: "✉",
        label: "Gmail",
        href: "mailto:praveen.dev.cloud@gmail.com",
    },
    Contact {
        icon: "☎",
        label: "Phone",
        href: "tel:+916382832865",
    },
    Contact {
        icon: "in",
        label: "LinkedIn Profile",
        href: "https://www.linkedin.com/in/praveen-a-devops",
    },
    Contact {
        icon: "⌥",
        label: "GitHub Profile",
        href: GITHUB_HREF,
    },
];

#[derive(Debug, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SUMMARY_PARAGRAPHS: [&str; 2] = [
    "Pursuing B.Tech in Information Technology with strong foundations in DevOps, Cloud Computing, and automation. Skilled in Docker, Kubernetes, Terraform, GitLab CI/CD, and AWS, with practical experience through academic projects and self-learning. Proficient in containerization and CI/CD pipelines, ready to apply these skills in real-world scenarios.",
    "Eager to join innovative teams, sharpen cloud-native and automation skills, and deliver value from day one.",
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "</>",
        title: "Quick Learner",
        description: "Rapidly acquiring new technologies and development practices",
    },
    Highlight {
        icon: "☁",
        title: "Cloud Enthusiast",
        description: "Passionate about AWS, Azure, and modern cloud architectures",
    },
    Highlight {
        icon: "⚡",
        title: "Problem Solver",
        description: "Analytical approach to troubleshooting and optimization",
    },
    Highlight {
        icon: "🛡",
        title: "Quality Focused",
        description: "Committed to best practices and secure coding standards",
    },
];

pub const STATS: [(&str, &str); 3] = [
    ("1+", "Years of Self Learning"),
    ("5+", "Projects Built"),
    ("5+", "Technologies Learned"),
];

#[derive(Debug, PartialEq)]
pub struct SkillCategory {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [&'static str],
    pub gradient: &'static str,
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        icon: "☁",
        title: "Cloud Platforms",
        skills: &["AWS", "Azure", "Google Cloud"],
        gradient: "gradient-blue",
    },
    SkillCategory {
        icon: "▤",
        title: "Infrastructure",
        skills: &["Terraform", "CloudFormation"],
        gradient: "gradient-green",
    },
    SkillCategory {
        icon: "⬚",
        title: "Containerization",
        skills: &["Docker", "Kubernetes", "Helm"],
        gradient: "gradient-purple",
    },
    SkillCategory {
        icon: "⑂",
        title: "CI/CD Tools",
        skills: &["Jenkins", "GitLab CI", "GitHub Actions", "Azure DevOps"],
        gradient: "gradient-orange",
    },
    SkillCategory {
        icon: "▦",
        title: "Monitoring",
        skills: &["Prometheus", "Grafana"],
        gradient: "gradient-pink",
    },
    SkillCategory {
        icon: "⛁",
        title: "Databases",
        skills: &["PostgreSQL", "MongoDB"],
        gradient: "gradient-teal",
    },
    SkillCategory {
        icon: "</>",
        title: "Programming",
        skills: &["Python", "Bash"],
        gradient: "gradient-yellow",
    },
];

#[derive(Debug, PartialEq)]
pub struct Proficiency {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
}

pub const PROFICIENCIES: &[Proficiency] = &[
    Proficiency { name: "AWS", level: 95, category: "Cloud" },
    Proficiency { name: "Docker", level: 80, category: "Container" },
    Proficiency { name: "Linux", level: 85, category: "OS" },
    Proficiency { name: "Git", level: 90, category: "Version Control" },
    Proficiency { name: "Python", level: 70, category: "Programming" },
    Proficiency { name: "Jenkins", level: 85, category: "CI/CD" },
];

pub const CERTIFICATION_BANNER: &str = "AWS Certified (On Progress) • Azure Certified (On Progress) •";

#[derive(Debug, PartialEq)]
pub struct Degree {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EDUCATION: &[Degree] = &[
    Degree {
        degree: "Bachelor of Engineering",
        field: "Information Technology",
        institution: "K S Rangasamy College of Technology",
        location: "Namakkal, Tamil Nadu",
        period: "2023 - 2027",
        grade: "CGPA: 7.8/10",
        highlights: &[
            "Specialized in Cloud Computing and DevOps",
            "Member of Zealous Information Technology Association",
        ],
    },
    Degree {
        degree: "Higher Secondary Certificate",
        field: "Science",
        institution: "Sri Vidya Mandir Matriculation Higher Secondary School",
        location: "Namakkal, Tamil Nadu",
        period: "2022 - 2023",
        grade: "Percentage: 81%",
        highlights: &[
            "Active participant in Science Exhibitions",
            "Led school technology club",
        ],
    },
];

#[derive(Debug, PartialEq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub credential_url: &'static str,
    pub level: &'static str,
    pub gradient: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "AWS Solutions Architect Professional",
        issuer: "Amazon Web Services",
        date: "On Progress",
        credential_url: "https://www.credly.com/badges/aws-solutions-architect-professional",
        level: "Professional",
        gradient: "gradient-orange",
    },
    Certification {
        title: "Oracle Cloud Infrastructure 2025 Certified AI Foundations Associate",
        issuer: "Oracle",
        date: "2025",
        credential_url: "https://catalog-education.oracle.com/apex/f?p=1010:2:106302833521560::::P2_AUTHCODE,P2_AUTH_KEY,P2_ARG_INVALID_CNT:MX238423qH73c,NtFPU238351Ytjh244ElkC,0",
        level: "Associate",
        gradient: "gradient-purple",
    },
    Certification {
        title: "Azure DevOps Engineer Expert",
        issuer: "Microsoft",
        date: "On Progress",
        credential_url: "https://www.credly.com/badges/azure-devops-engineer-expert",
        level: "Expert",
        gradient: "gradient-blue",
    },
    Certification {
        title: "Google Cloud Professional Cloud Architect",
        issuer: "Google Cloud",
        date: "On Progress",
        credential_url: "https://www.credential.net/google-cloud-professional-architect",
        level: "Professional",
        gradient: "gradient-green",
    },
    Certification {
        title: "HashiCorp Terraform Associate",
        issuer: "HashiCorp",
        date: "On Progress",
        credential_url: "https://www.credly.com/badges/hashicorp-terraform-associate",
        level: "Associate",
        gradient: "gradient-pink",
    },
    Certification {
        title: "Docker Certified Associate",
        issuer: "Docker Inc.",
        date: "On Progress",
        credential_url: "https://www.credly.com/badges/docker-certified-associate",
        level: "Associate",
        gradient: "gradient-blue",
    },
];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub performance: &'static str,
    pub reliability: &'static str,
    pub gradient: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        icon: "⚡",
        title: "3-Tier Scalable Web Application on AWS",
        description: "Architected and deployed a highly available 3-tier web application on AWS using EC2, RDS, and S3 with load balancing, auto scaling, and secure VPC networking.",
        technologies: &["AWS", "EC2", "RDS", "S3", "IAM", "VPC"],
        highlights: &[
            "Achieved 60fps animations on low-end mobile devices",
            "Reduced animation bundle size by 40%",
            "Implemented adaptive performance based on device capability",
        ],
        performance: "35% lower latency",
        reliability: "99.9% uptime",
        gradient: "gradient-blue",
    },
    Project {
        icon: "▦",
        title: "AWS Fully Serverless Architecture with CI/CD",
        description: "Implemented a production-grade serverless API architecture using AWS Lambda, API Gateway, and Aurora Serverless, with infrastructure provisioned via Terraform and CI/CD powered by GitHub Actions.",
        technologies: &["Lambda", "API Gateway", "Terraform", "GitHub Actions"],
        highlights: &[
            "Automated deployments via GitHub Actions CI/CD pipeline",
            "Achieved secure, scalable API delivery with private VPC endpoints and Secrets Manager",
        ],
        performance: "100% serverless uptime",
        reliability: "Fully automated deployments",
        gradient: "gradient-purple",
    },
    Project {
        icon: "▤",
        title: "AWS Infrastructure Automation with Terraform & GitLab CI/CD",
        description: "Developed a DevOps pipeline to provision and manage AWS infrastructure using Terraform, fully automated with GitLab CI/CD for seamless deployments.",
        technologies: &["Terraform", "GitLab CI/CD", "EC2", "S3", "VPC"],
        highlights: &[
            "Automated multi-environment AWS provisioning with Terraform",
            "Enabled zero-touch deployments through GitLab CI/CD pipelines",
        ],
        performance: "Faster infrastructure provisioning",
        reliability: "Consistent, error-free deployments",
        gradient: "gradient-orange",
    },
];

#[derive(Debug, PartialEq)]
pub struct Volunteering {
    pub icon: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub contributions: &'static [&'static str],
    pub impact: &'static str,
    pub gradient: &'static str,
}

pub const VOLUNTEERING: &[Volunteering] = &[
    Volunteering {
        icon: "📖",
        title: "Community Volunteer",
        organization: "Atchayam Trust",
        period: "2024 - Present",
        description: "Supporting community events and elder care initiatives.",
        contributions: &[
            "Volunteered at old age homes during functions.",
            "Distributed food, clothing, and essential supplies.",
            "Fostered intergenerational connections through activities and conversations",
            "Assisted in event planning and logistics for community welfare programs.",
        ],
        impact: "Improved quality of life for elders and promoted community bonding.",
        gradient: "gradient-pink",
    },
    Volunteering {
        icon: "❤",
        title: "Community Volunteer",
        organization: "Ullash Trust",
        period: "2023 - Present",
        description: "Educating and mentoring tribal students in Sittling, Dharmapuri.",
        contributions: &[
            "Taught 10th–12th grade tribal students in Sittling, Dharmapuri.",
            "Encouraged learning despite resource and infrastructure challenges.",
            "Organized interactive workshops to improve problem-solving and critical thinking skills.",
        ],
        impact: "Empowered rural students with knowledge and confidence to pursue higher education.",
        gradient: "gradient-orange",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label_is_first_word() {
        assert_eq!(CONTACTS[0].short_label(), "Namakkal,");
        assert_eq!(CONTACTS[3].short_label(), "LinkedIn");
    }

    #[test]
    fn proficiency_levels_are_percentages() {
        assert!(PROFICIENCIES.iter().all(|skill| skill.level <= 100));
    }

    #[test]
    fn every_link_has_a_target() {
        let hrefs = CONTACTS
            .iter()
            .map(|contact| contact.href)
            .chain(CERTIFICATIONS.iter().map(|cert| cert.credential_url));

        for href in hrefs {
            assert!(
                href.starts_with("https://") || href.starts_with("mailto:") || href.starts_with("tel:"),
                "{href}"
            );
        }
    }
}
