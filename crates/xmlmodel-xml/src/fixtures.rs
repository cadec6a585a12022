//! Record types shared by the unit tests of this crate.

use std::sync::LazyLock;

use xmlmodel_schema::{
    FieldDescriptor, RecordSchema, RecordValue, TypeDescriptor, ValidationError, Value, XmlModel,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExampleModel {
    pub name: String,
    pub value: i64,
}

impl XmlModel for ExampleModel {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
            RecordSchema::builder("ExampleModel")
                .xml_name("example")
                .field(FieldDescriptor::new("name", TypeDescriptor::string()))
                .field(FieldDescriptor::new("value", TypeDescriptor::integer()))
                .build()
        });
        &SCHEMA
    }

    fn to_record(&self) -> RecordValue {
        RecordValue::of::<Self>()
            .with("name", &self.name)
            .with("value", self.value)
    }

    fn from_record(mut record: RecordValue) -> Result<Self, ValidationError> {
        Ok(Self {
            name: record.take("name")?,
            value: record.take("value")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ExampleWithContent {
    pub content: String,
    pub name: String,
    pub value: i64,
}

impl XmlModel for ExampleWithContent {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
            RecordSchema::builder("ExampleWithContent")
                .xml_name("example")
                .field(FieldDescriptor::content(TypeDescriptor::string()).with_default("content"))
                .field(FieldDescriptor::new("name", TypeDescriptor::string()))
                .field(FieldDescriptor::new("value", TypeDescriptor::integer()))
                .build()
        });
        &SCHEMA
    }

    fn to_record(&self) -> RecordValue {
        RecordValue::of::<Self>()
            .with("xml_content", &self.content)
            .with("name", &self.name)
            .with("value", self.value)
    }

    fn from_record(mut record: RecordValue) -> Result<Self, ValidationError> {
        Ok(Self {
            content: record.take("xml_content")?,
            name: record.take("name")?,
            value: record.take("value")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Level2 {
    pub name: String,
    pub value: i64,
}

impl XmlModel for Level2 {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
            RecordSchema::builder("Level2")
                .field(FieldDescriptor::new("name", TypeDescriptor::string()))
                .field(FieldDescriptor::new("value", TypeDescriptor::integer()))
                .build()
        });
        &SCHEMA
    }

    fn to_record(&self) -> RecordValue {
        RecordValue::of::<Self>()
            .with("name", &self.name)
            .with("value", self.value)
    }

    fn from_record(mut record: RecordValue) -> Result<Self, ValidationError> {
        Ok(Self {
            name: record.take("name")?,
            value: record.take("value")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Level1 {
    pub level2: Level2,
    pub value: i64,
}

impl XmlModel for Level1 {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
            RecordSchema::builder("Level1")
                .field(FieldDescriptor::new("level2", TypeDescriptor::record::<Level2>()))
                .field(FieldDescriptor::new("value", TypeDescriptor::integer()))
                .build()
        });
        &SCHEMA
    }

    fn to_record(&self) -> RecordValue {
        RecordValue::of::<Self>()
            .with("level2", self.level2.to_record())
            .with("value", self.value)
    }

    fn from_record(mut record: RecordValue) -> Result<Self, ValidationError> {
        Ok(Self {
            level2: record.take_record("level2")?,
            value: record.take("value")?,
        })
    }
}

macro_rules! text_item {
    ($name:ident, $tag:literal) => {
        #[derive(Debug, Clone, PartialEq)]
        pub(crate) struct $name {
            pub content: String,
        }

        impl $name {
            pub(crate) fn new(content: &str) -> Self {
                Self {
                    content: content.to_owned(),
                }
            }
        }

        impl XmlModel for $name {
            fn schema() -> &'static RecordSchema {
                static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
                    RecordSchema::builder(stringify!($name))
                        .xml_name($tag)
                        .field(FieldDescriptor::content(TypeDescriptor::string()).with_default(""))
                        .build()
                });
                &SCHEMA
            }

            fn to_record(&self) -> RecordValue {
                RecordValue::of::<Self>().with("xml_content", &self.content)
            }

            fn from_record(mut record: RecordValue) -> Result<Self, ValidationError> {
                Ok(Self {
                    content: record.take("xml_content")?,
                })
            }
        }
    };
}

text_item!(List1Item, "list1");
text_item!(List2Item, "list2");

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListHolder {
    pub first: Vec<List1Item>,
    pub second: Vec<List2Item>,
}

impl XmlModel for ListHolder {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
            RecordSchema::builder("ListHolder")
                .xml_name("root")
                .field(FieldDescriptor::new("list1", TypeDescriptor::list::<List1Item>()))
                .field(FieldDescriptor::new("list2", TypeDescriptor::list::<List2Item>()))
                .build()
        });
        &SCHEMA
    }

    fn to_record(&self) -> RecordValue {
        RecordValue::of::<Self>()
            .with(
                "list1",
                self.first.iter().map(XmlModel::to_record).collect::<Vec<_>>(),
            )
            .with(
                "list2",
                self.second.iter().map(XmlModel::to_record).collect::<Vec<_>>(),
            )
    }

    fn from_record(mut record: RecordValue) -> Result<Self, ValidationError> {
        Ok(Self {
            first: record.take_records("list1")?,
            second: record.take_records("list2")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Inner;

impl XmlModel for Inner {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: LazyLock<RecordSchema> =
            LazyLock::new(|| RecordSchema::builder("Inner").build());
        &SCHEMA
    }

    fn to_record(&self) -> RecordValue {
        RecordValue::of::<Self>()
    }

    fn from_record(_record: RecordValue) -> Result<Self, ValidationError> {
        Ok(Self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Outer {
    pub inner: Option<Inner>,
}

impl XmlModel for Outer {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
            RecordSchema::builder("Outer")
                .field(FieldDescriptor::new(
                    "inner",
                    TypeDescriptor::optional(TypeDescriptor::record::<Inner>()),
                ))
                .build()
        });
        &SCHEMA
    }

    fn to_record(&self) -> RecordValue {
        RecordValue::of::<Self>().with("inner", self.inner.as_ref().map(XmlModel::to_record))
    }

    fn from_record(mut record: RecordValue) -> Result<Self, ValidationError> {
        Ok(Self {
            inner: record.take_optional_record("inner")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Named {
    pub label: String,
    pub level2: Level2,
}

impl XmlModel for Named {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
            RecordSchema::builder("Named")
                .field(FieldDescriptor::new("label", TypeDescriptor::string()).with_alias("Label"))
                .field(
                    FieldDescriptor::new("level2", TypeDescriptor::record::<Level2>())
                        .with_serialization_alias("child"),
                )
                .build()
        });
        &SCHEMA
    }

    fn to_record(&self) -> RecordValue {
        RecordValue::of::<Self>()
            .with("label", &self.label)
            .with("level2", self.level2.to_record())
    }

    fn from_record(mut record: RecordValue) -> Result<Self, ValidationError> {
        Ok(Self {
            label: record.take("label")?,
            level2: record.take_record("level2")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Holder;

impl XmlModel for Holder {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
            RecordSchema::builder("Holder")
                .xml_name("test")
                .field(FieldDescriptor::new("data", TypeDescriptor::bare_list()))
                .build()
        });
        &SCHEMA
    }

    fn to_record(&self) -> RecordValue {
        RecordValue::of::<Self>().with("data", Vec::<Value>::new())
    }

    fn from_record(_record: RecordValue) -> Result<Self, ValidationError> {
        Ok(Self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tree {
    pub name: String,
    pub children: Vec<Tree>,
}

impl XmlModel for Tree {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
            RecordSchema::builder("Tree")
                .xml_name("node")
                .field(FieldDescriptor::new("name", TypeDescriptor::string()))
                .field(FieldDescriptor::new("children", TypeDescriptor::list::<Tree>()))
                .build()
        });
        &SCHEMA
    }

    fn to_record(&self) -> RecordValue {
        RecordValue::of::<Self>().with("name", &self.name).with(
            "children",
            self.children.iter().map(XmlModel::to_record).collect::<Vec<_>>(),
        )
    }

    fn from_record(mut record: RecordValue) -> Result<Self, ValidationError> {
        Ok(Self {
            name: record.take("name")?,
            children: record.take_records("children")?,
        })
    }
}

pub(crate) fn cat() -> &'static RecordSchema {
    static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
        RecordSchema::builder("Cat")
            .field(FieldDescriptor::new("lives", TypeDescriptor::integer()).with_default(9))
            .build()
    });
    &SCHEMA
}

pub(crate) fn dog() -> &'static RecordSchema {
    static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
        RecordSchema::builder("Dog")
            .field(FieldDescriptor::new("good", TypeDescriptor::boolean()).with_default(true))
            .build()
    });
    &SCHEMA
}

pub(crate) fn pets() -> &'static RecordSchema {
    static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
        RecordSchema::builder("Pets")
            .field(FieldDescriptor::new(
                "animals",
                TypeDescriptor::list_of(TypeDescriptor::union([
                    TypeDescriptor::record_of(cat),
                    TypeDescriptor::record_of(dog),
                ])),
            ))
            .field(FieldDescriptor::new(
                "favorite",
                TypeDescriptor::optional(TypeDescriptor::union([
                    TypeDescriptor::record_of(dog),
                    TypeDescriptor::record_of(cat),
                ])),
            ))
            .build()
    });
    &SCHEMA
}

pub(crate) fn points() -> &'static RecordSchema {
    static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
        RecordSchema::builder("Points")
            .xml_name("test")
            .field(FieldDescriptor::new(
                "data",
                TypeDescriptor::list_of(TypeDescriptor::integer()),
            ))
            .build()
    });
    &SCHEMA
}

pub(crate) fn untyped() -> &'static RecordSchema {
    static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
        RecordSchema::builder("Untyped")
            .field(FieldDescriptor::untyped("mystery"))
            .build()
    });
    &SCHEMA
}

pub(crate) fn mixed() -> &'static RecordSchema {
    static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
        RecordSchema::builder("Mixed")
            .field(FieldDescriptor::new(
                "pet",
                TypeDescriptor::union([
                    TypeDescriptor::record_of(cat),
                    TypeDescriptor::list_of(TypeDescriptor::record_of(dog)),
                ]),
            ))
            .build()
    });
    &SCHEMA
}

pub(crate) fn kennel() -> &'static RecordSchema {
    static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
        RecordSchema::builder("Kennel")
            .field(FieldDescriptor::new(
                "pack",
                TypeDescriptor::union([
                    TypeDescriptor::list_of(TypeDescriptor::record_of(cat)),
                    TypeDescriptor::list_of(TypeDescriptor::record_of(dog)),
                ]),
            ))
            .build()
    });
    &SCHEMA
}
