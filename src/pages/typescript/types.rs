//! TypeScript types and interfaces lesson.

use leptos::prelude::*;

use crate::components::{CodeBox, KeyConcepts, LessonBox};
use crate::models::DemoUser;

const INTERFACE_VS_TYPE: &str = r#"// Interface (erweitbar)
interface User {
  id: number
  name: string
}

interface User {
  email: string  // ✅ Erweitert User
}

// Type Alias (nicht erweitbar)
type Product = {
  id: number
  title: string
}

// Beide können extended werden
interface Admin extends User {
  permissions: string[]
}

type AdminProduct = Product & {
  adminOnly: boolean
}"#;

const PROPS_INTERFACE: &str = r#"interface ButtonProps {
  text: string
  onClick: () => void
  disabled?: boolean           // Optional
  variant?: 'primary' | 'secondary'
}

function Button({ text, onClick, disabled = false, variant = 'primary' }: ButtonProps) {
  return (
    <button
      onClick={onClick}
      disabled={disabled}
      className={variant}
    >
      {text}
    </button>
  )
}"#;

const GENERICS: &str = r#"// Generic Function
function identity<T>(value: T): T {
  return value
}

const num = identity<number>(42)       // T = number
const str = identity<string>("Hello")  // T = string

// Generic mit Array
function getFirst<T>(arr: T[]): T | undefined {
  return arr[0]
}

getFirst([1, 2, 3])           // number | undefined
getFirst(["a", "b", "c"])     // string | undefined

// Generic Interface
interface ApiResponse<T> {
  data: T
  status: number
  message: string
}

const userResponse: ApiResponse<User> = {
  data: { id: 1, name: "Max", email: "max@test.de", role: "user" },
  status: 200,
  message: "Success"
}"#;

const UTILITY_TYPES: &str = r#"interface User {
  id: number
  name: string
  email: string
  password: string
}

// Partial - alle Props optional
type UpdateUser = Partial<User>
// { id?: number, name?: string, ... }

// Pick - nur bestimmte Props
type UserPreview = Pick<User, 'id' | 'name'>
// { id: number, name: string }

// Omit - Props ausschließen
type PublicUser = Omit<User, 'password'>
// { id: number, name: string, email: string }

// Required - alle Props required
type RequiredUser = Required<Partial<User>>

// Readonly - Props unveränderbar
type ImmutableUser = Readonly<User>

// Record - Object mit bestimmten Keys
type UserRoles = Record<string, User>
// { [key: string]: User }"#;

const TYPE_GUARDS: &str = r#"// typeof Guard
function printValue(value: string | number) {
  if (typeof value === "string") {
    console.log(value.toUpperCase())  // string methods
  } else {
    console.log(value.toFixed(2))     // number methods
  }
}

// instanceof Guard
function handleError(error: Error | string) {
  if (error instanceof Error) {
    console.log(error.message)
  } else {
    console.log(error)
  }
}

// Custom Type Guard
interface Dog {
  bark: () => void
}

interface Cat {
  meow: () => void
}

function isDog(pet: Dog | Cat): pet is Dog {
  return (pet as Dog).bark !== undefined
}

function handlePet(pet: Dog | Cat) {
  if (isDog(pet)) {
    pet.bark()  // TypeScript weiß: pet ist Dog
  } else {
    pet.meow()  // TypeScript weiß: pet ist Cat
  }
}"#;

const ENUMS: &str = r#"// Numeric Enum
enum Status {
  Pending = 0,
  Active = 1,
  Inactive = 2
}

let userStatus: Status = Status.Active

// String Enum (besser lesbar)
enum Role {
  Admin = "ADMIN",
  User = "USER",
  Guest = "GUEST"
}

// Const Enum (bessere Performance)
const enum Direction {
  Up = "UP",
  Down = "DOWN",
  Left = "LEFT",
  Right = "RIGHT"
}

// Alternative: Union Type (moderner)
type RoleType = "admin" | "user" | "guest""#;

const CONCEPTS: &[&str] = &[
    "**Interface:** Für Objekt-Shapes, erweitbar",
    "**Type Alias:** Für Unions, Primitives, Intersections",
    "**Generics:** Flexible, wiederverwendbare Typen mit `<T>`",
    "**Utility Types:** Partial, Pick, Omit, etc. sparen Zeit",
    "**Type Guards:** Runtime-Prüfungen für Type-Safety",
    "**Union Types > Enums:** Einfacher und moderner",
];

#[component]
pub fn TypesPage() -> impl IntoView {
    let user = RwSignal::new(DemoUser::default());

    view! {
        <h1 class="page-title">"Types & Interfaces 🔷"</h1>

        <LessonBox title="1. Interface vs Type Alias">
            <CodeBox code=INTERFACE_VS_TYPE />
            <p class="spaced">
                "💡 Regel: Nutze " <strong>"interface"</strong> " für Objekte, "
                <strong>"type"</strong> " für Unions/Primitives"
            </p>
        </LessonBox>

        <LessonBox title="2. Interface für React Props">
            <CodeBox code=PROPS_INTERFACE />
            <div class="demo-result">
                {move || user.with(DemoUser::summary)}
                <div class="text-muted">{move || user.with(DemoUser::contact)}</div>
            </div>
            <button on:click=move |_| user.update(DemoUser::toggle_role)>"Toggle Role"</button>
        </LessonBox>

        <LessonBox title="3. Generics (flexible Typen)">
            <CodeBox code=GENERICS />
        </LessonBox>

        <LessonBox title="4. Utility Types (eingebaute Helfer)">
            <CodeBox code=UTILITY_TYPES />
        </LessonBox>

        <LessonBox title="5. Type Guards (Typ-Prüfung)">
            <CodeBox code=TYPE_GUARDS />
        </LessonBox>

        <LessonBox title="6. Enums (Aufzählungen)">
            <CodeBox code=ENUMS />
            <p class="spaced">"💡 Tipp: Union Types sind oft besser als Enums (einfacher, kein Runtime-Code)"</p>
        </LessonBox>

        <KeyConcepts items=CONCEPTS />
    }
}
